use crate::system::access::Feature;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Date,
    Money,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

const fn col(key: &'static str, label: &'static str, kind: ColumnKind) -> Column {
    Column { key, label, kind }
}

/// A backend collection shown by a list screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub feature: Feature,
    pub endpoint: &'static str,
    pub columns: &'static [Column],
    /// Values offered by the status filter; empty hides the filter.
    pub statuses: &'static [&'static str],
    /// Bookings show advance/balance columns.
    pub tracks_payments: bool,
}

impl Resource {
    pub fn title(&self) -> &'static str {
        self.feature.label()
    }
}

use ColumnKind::*;

const PICKUP_REQUESTS: Resource = Resource {
    feature: Feature::PickupRequests,
    endpoint: "/api/pickup-requests",
    columns: &[
        col("customerName", "Customer", Text),
        col("address", "Address", Text),
        col("wasteType", "Waste type", Text),
        col("pickupDate", "Pickup date", Date),
        col("status", "Status", Status),
    ],
    statuses: &["pending", "scheduled", "completed", "cancelled"],
    tracks_payments: false,
};

const BOOKINGS: Resource = Resource {
    feature: Feature::Bookings,
    endpoint: "/api/bookings",
    columns: &[
        col("customerName", "Customer", Text),
        col("serviceName", "Service", Text),
        col("bookingDate", "Date", Date),
        col("totalAmount", "Total", Money),
        col("status", "Status", Status),
    ],
    statuses: &["pending", "confirmed", "completed", "cancelled"],
    tracks_payments: true,
};

const SERVICES: Resource = Resource {
    feature: Feature::Services,
    endpoint: "/api/services",
    columns: &[
        col("name", "Name", Text),
        col("category", "Category", Text),
        col("price", "Price", Money),
        col("status", "Status", Status),
    ],
    statuses: &["active", "inactive"],
    tracks_payments: false,
};

const STAFF: Resource = Resource {
    feature: Feature::Staff,
    endpoint: "/api/staff",
    columns: &[
        col("name", "Name", Text),
        col("position", "Position", Text),
        col("phone", "Phone", Text),
        col("status", "Status", Status),
    ],
    statuses: &["active", "on-leave", "inactive"],
    tracks_payments: false,
};

const CUSTOMERS: Resource = Resource {
    feature: Feature::Customers,
    endpoint: "/api/customers",
    columns: &[
        col("name", "Name", Text),
        col("email", "Email", Text),
        col("phone", "Phone", Text),
        col("createdAt", "Joined", Date),
    ],
    statuses: &[],
    tracks_payments: false,
};

const INQUIRIES: Resource = Resource {
    feature: Feature::Inquiries,
    endpoint: "/api/inquiries",
    columns: &[
        col("name", "From", Text),
        col("email", "Email", Text),
        col("subject", "Subject", Text),
        col("createdAt", "Received", Date),
        col("status", "Status", Status),
    ],
    statuses: &["new", "open", "resolved"],
    tracks_payments: false,
};

const NOTIFICATIONS: Resource = Resource {
    feature: Feature::Notifications,
    endpoint: "/api/notifications",
    columns: &[
        col("title", "Title", Text),
        col("message", "Message", Text),
        col("createdAt", "Sent", Date),
        col("status", "Status", Status),
    ],
    statuses: &["unread", "read"],
    tracks_payments: false,
};

const EMPLOYEES: Resource = Resource {
    feature: Feature::Employees,
    endpoint: "/api/employees",
    columns: &[
        col("name", "Name", Text),
        col("email", "Email", Text),
        col("role", "Role", Text),
        col("department", "Department", Text),
        col("status", "Status", Status),
    ],
    statuses: &["active", "inactive"],
    tracks_payments: false,
};

const BLOG: Resource = Resource {
    feature: Feature::Blog,
    endpoint: "/api/blogs",
    columns: &[
        col("title", "Title", Text),
        col("author", "Author", Text),
        col("publishedAt", "Published", Date),
        col("status", "Status", Status),
    ],
    statuses: &["draft", "published"],
    tracks_payments: false,
};

/// List screen backing `feature`; the dashboard has none.
pub fn resource_for(feature: Feature) -> Option<Resource> {
    match feature {
        Feature::Dashboard => None,
        Feature::PickupRequests => Some(PICKUP_REQUESTS),
        Feature::Bookings => Some(BOOKINGS),
        Feature::Services => Some(SERVICES),
        Feature::Staff => Some(STAFF),
        Feature::Customers => Some(CUSTOMERS),
        Feature::Inquiries => Some(INQUIRIES),
        Feature::Notifications => Some(NOTIFICATIONS),
        Feature::Employees => Some(EMPLOYEES),
        Feature::Blog => Some(BLOG),
    }
}
