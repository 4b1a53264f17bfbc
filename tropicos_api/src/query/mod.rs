mod common;
pub use self::common::{Query, QueryCommon, SortOrder};

mod search;
pub use self::search::{SearchQuery, SearchType};

mod list;
pub use self::list::ListNamesQuery;
