pub mod new_slide;
pub mod slide_summary;

pub use new_slide::NewSlide;
pub use slide_summary::SlideSummary;
