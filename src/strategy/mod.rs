mod generic;
mod open_graph;
mod site_profile;
mod structured;

pub use generic::GenericHeuristicStrategy;
pub use open_graph::OpenGraphStrategy;
pub use site_profile::{Lookup, SiteProfile, SiteProfileStrategy, SITE_PROFILES};
pub use structured::{parse_json_ld_location, StructuredDataStrategy};

use crate::{data::ScrapedJob, document::Document};

/// One way of recovering a [`ScrapedJob`] from a page. Implementations are
/// pure: same document and URL, same answer.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// `None` means the strategy found nothing it recognises at all.
    fn extract<D: Document>(&self, doc: &D, url: &str) -> Option<ScrapedJob>;
}
