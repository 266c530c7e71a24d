use serde::Serialize;
use tracing::debug;

use crate::{
    data::{merge_prefer_right, ScrapedJob},
    document::Document,
    strategy::{
        GenericHeuristicStrategy, OpenGraphStrategy, SiteProfileStrategy, Strategy,
        StructuredDataStrategy,
    },
};

/// Which stage of the pipeline produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionSource {
    StructuredData,
    SiteProfile,
    GenericFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub source: ExtractionSource,
    pub job: ScrapedJob,
}

enum Stage {
    TryStructured,
    TrySiteProfile,
    TryGenericFallback,
    Done(Extraction),
}

/// Runs the strategies in priority order, stopping at the first one that
/// identifies the posting. Each stage runs at most once per call.
#[derive(Debug, Default)]
pub struct ExtractionPipeline {
    structured: StructuredDataStrategy,
    site_profile: SiteProfileStrategy,
    open_graph: OpenGraphStrategy,
    generic: GenericHeuristicStrategy,
}

impl ExtractionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn run<S: Strategy, D: Document>(strategy: &S, doc: &D, url: &str) -> Option<ScrapedJob> {
        let job = strategy.extract(doc, url);
        debug!("{} strategy: {:?}", strategy.name(), job);
        job
    }

    pub fn extract<D: Document>(&self, doc: &D, url: &str) -> Extraction {
        let mut stage = Stage::TryStructured;
        loop {
            stage = match stage {
                Stage::TryStructured => match Self::run(&self.structured, doc, url) {
                    Some(job) if job.is_identified() => Stage::Done(Extraction {
                        source: ExtractionSource::StructuredData,
                        job,
                    }),
                    _ => Stage::TrySiteProfile,
                },

                Stage::TrySiteProfile => {
                    let site = Self::run(&self.site_profile, doc, url).unwrap_or_default();
                    if site.is_identified() {
                        let og = Self::run(&self.open_graph, doc, url).unwrap_or_default();
                        Stage::Done(Extraction {
                            source: ExtractionSource::SiteProfile,
                            job: merge_prefer_right(og, site),
                        })
                    } else {
                        Stage::TryGenericFallback
                    }
                }

                Stage::TryGenericFallback => {
                    let og = Self::run(&self.open_graph, doc, url).unwrap_or_default();
                    let generic = Self::run(&self.generic, doc, url).unwrap_or_default();
                    Stage::Done(Extraction {
                        source: ExtractionSource::GenericFallback,
                        job: merge_prefer_right(og, generic),
                    })
                }

                Stage::Done(extraction) => return extraction,
            }
        }
    }
}
