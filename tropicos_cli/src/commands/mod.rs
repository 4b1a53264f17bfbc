//! CLI subcommand implementations.

pub mod list;
pub mod name;
pub mod search;

use tropicos_api::{ApiResponse, Format};

/// Prints the body unchanged when the service was asked for XML. Returns
/// `true` if it did, in which case there is nothing left to render.
pub(crate) fn print_raw_xml<T>(resp: &ApiResponse<T>) -> bool {
    if resp.format() != Format::Xml {
        return false;
    }
    println!("{}", resp.body());
    true
}
