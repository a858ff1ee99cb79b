//! The nine content blocks of the landing page, top to bottom.

mod biography;
mod calls;
mod footer;
mod galleries;
mod hero;
mod process;
mod trust;

pub use biography::Biography;
pub use calls::{FinalCall, SecondaryCall};
pub use footer::Footer;
pub use galleries::{HappyPatientsGallery, ResultsGallery};
pub use hero::Hero;
pub use process::ProcessSteps;
pub use trust::TrustReasons;
