//! Page sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! App
//! ├── NavBar          (menu + scroll state, window scroll listener)
//! └── main
//!     ├── Hero
//!     ├── ServiceList
//!     │   └── ServiceCard (x4)
//!     ├── DevelopmentSection
//!     ├── TrustSection
//!     ├── ContactSection
//!     └── Footer
//! ```
//!
//! Every section except [`NavBar`] is a pure function of the constants in
//! [`crate::content`].

mod app;
mod brand;
mod contact;
mod development;
#[cfg(feature = "ssr")]
mod document;
mod footer;
mod hero;
mod nav;
mod services;
mod trust;

pub use app::App;
pub use brand::BrandMark;
pub use contact::ContactSection;
pub use development::DevelopmentSection;
#[cfg(feature = "ssr")]
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::NavBar;
pub use services::{ServiceCard, ServiceList};
pub use trust::TrustSection;
