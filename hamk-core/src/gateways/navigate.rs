#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Login,
    Dashboard,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Login => "login.html",
            Self::Dashboard => "dashboard.html",
        }
    }
}

pub trait NavigationGateway {
    fn current_page(&self) -> Page;
    fn navigate(&self, page: Page);
}
