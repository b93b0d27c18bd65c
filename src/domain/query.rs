use std::sync::OnceLock;

use bytes::Bytes;
use serde::Serialize;

pub const ATLAS_API_URL: &str = "https://api.recruitwithatlas.com/public-graphql";
pub const AGENCY_ALIAS: &str = "pobl";

pub const OPERATION_NAME: &str = "GetPublicJobOpenings";
pub const PAGE: u32 = 1;
pub const LIMIT: u32 = 50;

/// Operation text sent to Atlas. Newlines are escaped by the JSON encoder when
/// the payload is built, never by hand.
pub const PUBLIC_JOB_OPENINGS_QUERY: &str = r#"query GetPublicJobOpenings($input: PublicJobOpeningInput!, $limit: Int!, $page: Int!) {
  publicJobOpenings(input: $input, limit: $limit, page: $page) {
    items {
      ...PublicJobOpening
      __typename
    }
    __typename
  }
}

fragment PublicJobOpening on PublicJobOpening {
  id
  jobRole
  location {
    ...Location
    __typename
  }
  contractType
  salary
  salaryCurrency
  __typename
}

fragment Location on Location {
  name
  country
  locality
  region
  geo
  street_address
  postal_code
  __typename
}
"#;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: &'static str,
    pub variables: JobOpeningsVariables,
    pub query: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobOpeningsVariables {
    pub page: u32,
    pub limit: u32,
    pub input: JobOpeningInput,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobOpeningInput {
    pub agency_alias: &'static str,
}

impl GraphqlRequest {
    pub fn public_job_openings() -> Self {
        Self {
            operation_name: OPERATION_NAME,
            variables: JobOpeningsVariables {
                page: PAGE,
                limit: LIMIT,
                input: JobOpeningInput {
                    agency_alias: AGENCY_ALIAS,
                },
            },
            query: PUBLIC_JOB_OPENINGS_QUERY,
        }
    }
}

static PAYLOAD: OnceLock<String> = OnceLock::new();

/// JSON body for the job openings request, serialized once per process.
pub fn job_openings_payload() -> &'static str {
    PAYLOAD.get_or_init(|| {
        serde_json::to_string(&GraphqlRequest::public_job_openings())
            .expect("job openings request is always serializable")
    })
}

pub fn job_openings_body() -> Bytes {
    Bytes::from_static(job_openings_payload().as_bytes())
}
