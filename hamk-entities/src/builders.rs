pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{organization_builder::*, tagged_place_builder::*};

pub mod organization_builder {

    use super::*;
    use crate::{geo::*, organization::*};

    #[derive(Debug)]
    pub struct OrganizationBuild {
        organization: Organization,
    }

    impl OrganizationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.organization.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.organization.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.organization.pos = pos;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.organization.city = Some(city.into());
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.organization.state = Some(state.into());
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.organization.phone = Some(phone.into());
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.organization.url = Some(url.into());
            self
        }
        pub fn finish(self) -> Organization {
            self.organization
        }
    }

    impl Builder for Organization {
        type Build = OrganizationBuild;
        fn build() -> OrganizationBuild {
            OrganizationBuild {
                organization: Organization {
                    id: String::new(),
                    name: String::new(),
                    pos: MapPoint::default(),
                    city: None,
                    state: None,
                    phone: None,
                    url: None,
                },
            }
        }
    }
}

pub mod tagged_place_builder {

    use super::*;
    use crate::{geo::*, tag::*};

    #[derive(Debug)]
    pub struct TaggedPlaceBuild {
        place: TaggedPlace,
    }

    impl TaggedPlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = Some(id.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = Some(pos);
            self
        }
        pub fn tag(mut self, key: &str, value: &str) -> Self {
            self.place.tags.insert(key, value);
            self
        }
        pub fn finish(self) -> TaggedPlace {
            self.place
        }
    }

    impl Builder for TaggedPlace {
        type Build = TaggedPlaceBuild;
        fn build() -> TaggedPlaceBuild {
            TaggedPlaceBuild {
                place: TaggedPlace::default(),
            }
        }
    }
}
