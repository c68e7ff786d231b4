// Sidebar services: collaborator contracts, their server-backed
// implementations, and the async flows that drive the view state
pub mod backend;
pub mod contracts;
pub mod navigation;
pub mod sidebar_flows;

pub use backend::ServerBackend;
pub use contracts::{AuthService, ChatHistoryService, CreditStore, Navigation, SidebarBackend};
pub use navigation::{DioxusNavigation, RouteData, use_route_data};
