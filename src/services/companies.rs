// ABOUTME: Company directory capability used to pre-fill proposal documents
// ABOUTME: In-memory implementation serving a single fixed company profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use async_trait::async_trait;
use proposal_core::models::CompanyRecord;
use proposal_core::AppResult;

/// Looks up company profiles
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Basic profile of the caller's company
    async fn basic_profile(&self) -> AppResult<CompanyRecord>;
}

/// Directory backed by one in-memory record
#[derive(Debug, Clone)]
pub struct InMemoryCompanyDirectory {
    company: CompanyRecord,
}

impl InMemoryCompanyDirectory {
    /// Directory holding the default test company
    #[must_use]
    pub fn new() -> Self {
        Self {
            company: CompanyRecord {
                id: "1".to_owned(),
                company_name: "測試科技股份有限公司".to_owned(),
                tax_id: "12345678".to_owned(),
                address: "台北市信義區信義路五段7號".to_owned(),
                phone: "02-1234-5678".to_owned(),
                email: "contact@test-company.com.tw".to_owned(),
            },
        }
    }

    /// Directory holding a specific company
    #[must_use]
    pub const fn with_company(company: CompanyRecord) -> Self {
        Self { company }
    }
}

impl Default for InMemoryCompanyDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyDirectory for InMemoryCompanyDirectory {
    async fn basic_profile(&self) -> AppResult<CompanyRecord> {
        Ok(self.company.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_company() {
        let company = InMemoryCompanyDirectory::new().basic_profile().await.unwrap();
        assert_eq!(company.tax_id, "12345678");
        assert_eq!(company.id, "1");
    }
}
