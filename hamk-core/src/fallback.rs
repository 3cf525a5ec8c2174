use crate::entities::{MapPoint, Organization};

/// A small set of well known organizations that is shown
/// if the live search does not find anything.
pub fn sample_organizations() -> Vec<Organization> {
    #[rustfmt::skip]
    let samples = [
        ("ngo1", "Hope Foundation", 28.9845, 77.7064, "Meerut",        "UP", "+91 90000 00001", "https://example.org/hope"),
        ("ngo2", "ClothCare NGO",   28.6139, 77.2090, "New Delhi",     "DL", "+91 90000 00002", "https://example.org/clothcare"),
        ("ngo3", "WarmHands",       29.4727, 77.7085, "Muzaffarnagar", "UP", "+91 90000 00003", "https://example.org/warmhands"),
        ("ngo4", "Share & Wear",    28.4646, 77.0299, "Gurugram",      "HR", "+91 90000 00004", "https://example.org/sharewear"),
    ];
    samples
        .into_iter()
        .map(|(id, name, lat, lng, city, state, phone, url)| Organization {
            id: id.into(),
            name: name.into(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            city: Some(city.into()),
            state: Some(state.into()),
            phone: Some(phone.into()),
            url: Some(url.into()),
        })
        .collect()
}
