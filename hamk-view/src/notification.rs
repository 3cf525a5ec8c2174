use hamk_core::notification::{Notification, NotificationKind};
use maud::{html, Markup};

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    }
}

pub fn notification(n: &Notification) -> Markup {
    html! {
        div class={ "auth-message " (kind_class(n.kind)) } { (n.message) }
    }
}

pub fn notification_text(n: &Notification) -> String {
    match n.kind {
        NotificationKind::Success => format!("✔ {}", n.message),
        NotificationKind::Error => format!("✘ {}", n.message),
    }
}
