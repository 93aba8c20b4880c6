//! Leptos components for the landing page.
//!
//! Every content section is a stateless `#[component]` rendering one table
//! from [`crate::content`]. Only [`Navigation`] holds state (the mobile
//! menu).
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static output only)
//! └── AppLayout
//!     ├── Navigation
//!     ├── <main>
//!     │   ├── HeroSection          #hero
//!     │   ├── ValueProposition     #litepaper
//!     │   ├── UtilitySection       #utility (Staking card: #staking)
//!     │   ├── TokenomicsSection    #tokenomics
//!     │   ├── SecuritySection      #security
//!     │   ├── RoadmapSection       #roadmap
//!     │   └── CommunitySection     #community
//!     └── Footer
//! ```

mod app_layout;
mod community;
mod document;
mod footer;
mod hero;
mod navigation;
mod roadmap;
mod security;
mod tokenomics;
mod utility;
mod value_proposition;

pub use app_layout::AppLayout;
pub use community::CommunitySection;
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navigation::Navigation;
pub use roadmap::RoadmapSection;
pub use security::SecuritySection;
pub use tokenomics::TokenomicsSection;
pub use utility::UtilitySection;
pub use value_proposition::ValueProposition;
