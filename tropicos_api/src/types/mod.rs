//! Response shapes returned by the name service.
//!
//! Every field is optional: the service omits fields freely, and an absent
//! field is not an error.

mod name;
pub use self::name::{Name, NameId, NameSummary, Synonym, TypeSpecimen};

mod search;
pub use self::search::SearchResult;

mod reference;
pub use self::reference::{NameReference, Reference};

mod distribution;
pub use self::distribution::{Distribution, Location};

mod image;
pub use self::image::Image;

mod chromosome;
pub use self::chromosome::ChromosomeCount;

mod specimen;
pub use self::specimen::Specimen;
