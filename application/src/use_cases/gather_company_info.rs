//! Gather Company Info use case
//!
//! Resolves a company's website, then its owner and products, into a
//! [`CompanyProfile`]. Without a matched website no further lookups run.

use crate::config::ResearchParams;
use crate::ports::progress::ResearchProgress;
use crate::use_cases::resolve_facet::{ResolveFacetError, ResolveFacetUseCase};
use scout_domain::{CompanyProfile, Determination, Facet};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GatherCompanyInfoError {
    #[error("Company name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Lookup(#[from] ResolveFacetError),
}

/// Use case for building a company profile
pub struct GatherCompanyInfoUseCase {
    resolver: ResolveFacetUseCase,
    params: ResearchParams,
}

impl GatherCompanyInfoUseCase {
    pub fn new(resolver: ResolveFacetUseCase, params: ResearchParams) -> Self {
        Self { resolver, params }
    }

    pub async fn execute(
        &self,
        company_name: &str,
        progress: &dyn ResearchProgress,
    ) -> Result<CompanyProfile, GatherCompanyInfoError> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(GatherCompanyInfoError::EmptyName);
        }

        let policy = self.params.retry_policy();
        info!(
            "Researching '{}' ({} mode, up to {} attempt(s) per facet)",
            company_name,
            self.params.mode,
            policy.max_attempts()
        );

        let website = self
            .resolver
            .resolve(company_name, Facet::Website, "", policy, progress)
            .await?
            .determination;

        let website = match website {
            Determination::Concrete(website) => website,
            _ => {
                info!("No website matched '{}', skipping remaining facets", company_name);
                return Ok(CompanyProfile::unmatched(company_name));
            }
        };

        let owner = self
            .resolver
            .resolve(company_name, Facet::Owner, &website, policy, progress)
            .await?
            .determination;
        let products = self
            .resolver
            .resolve(company_name, Facet::Products, &website, policy, progress)
            .await?
            .determination;

        Ok(CompanyProfile::matched(
            company_name,
            website,
            owner.as_str(),
            products.as_str(),
        ))
    }
}
