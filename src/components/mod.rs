//! Site-level components: the page shell and its header and footer.

mod footer;
pub mod icons;
mod nav_header;
mod shell;

pub use footer::Footer;
pub use nav_header::NavHeader;
pub use shell::Shell;
