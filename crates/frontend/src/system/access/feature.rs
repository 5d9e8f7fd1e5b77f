use std::fmt;

/// Every navigable screen of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Dashboard,
    PickupRequests,
    Bookings,
    Services,
    Staff,
    Customers,
    Inquiries,
    Notifications,
    Employees,
    Blog,
}

impl Feature {
    /// In on-screen menu order.
    pub const ALL: [Feature; 10] = [
        Feature::Dashboard,
        Feature::PickupRequests,
        Feature::Bookings,
        Feature::Services,
        Feature::Staff,
        Feature::Customers,
        Feature::Inquiries,
        Feature::Notifications,
        Feature::Employees,
        Feature::Blog,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::Dashboard => "dashboard",
            Feature::PickupRequests => "pickup-requests",
            Feature::Bookings => "bookings",
            Feature::Services => "services",
            Feature::Staff => "staff",
            Feature::Customers => "customers",
            Feature::Inquiries => "inquiries",
            Feature::Notifications => "notifications",
            Feature::Employees => "employees",
            Feature::Blog => "blog",
        }
    }

    /// Exact match on the feature key; anything else is `None`.
    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Feature::Dashboard => "/dashboard",
            Feature::PickupRequests => "/pickup-requests",
            Feature::Bookings => "/bookings",
            Feature::Services => "/services",
            Feature::Staff => "/staff",
            Feature::Customers => "/customers",
            Feature::Inquiries => "/inquiries",
            Feature::Notifications => "/notifications",
            Feature::Employees => "/employees",
            Feature::Blog => "/blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Dashboard => "Dashboard",
            Feature::PickupRequests => "Pickup Requests",
            Feature::Bookings => "Service Bookings",
            Feature::Services => "Services",
            Feature::Staff => "Staff",
            Feature::Customers => "Customers",
            Feature::Inquiries => "Inquiries",
            Feature::Notifications => "Notifications",
            Feature::Employees => "Employees",
            Feature::Blog => "Blog Posts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Feature::Dashboard => "dashboard",
            Feature::PickupRequests => "truck",
            Feature::Bookings => "calendar",
            Feature::Services => "recycle",
            Feature::Staff => "id-card",
            Feature::Customers => "customers",
            Feature::Inquiries => "message",
            Feature::Notifications => "bell",
            Feature::Employees => "users",
            Feature::Blog => "file-text",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
