//! Fixed GraphQL payloads sent to the headless server.
//!
//! Both queries are static templates with quoted placeholder tokens
//! (`'id'`, `'siteId'`, `'type'`) that are replaced literally. The values are
//! not escaped: an id, site id, or type tag containing a quote or one of the
//! placeholder tokens corrupts the payload. Callers only pass server-issued
//! ids and fixed type tags.
//!
//! The templates span several lines for readability. The JSON string they
//! wrap may not contain raw newlines, so [`QueryPayload`] folds every line
//! break into a space before the payload goes on the wire.
//!
//! # Example
//!
//! ```
//! use headless_dam_client::{GraphQlQuery, SearchQuery};
//!
//! let payload = SearchQuery::new("site-1", "CMPicture").payload();
//! assert!(!payload.as_str().contains('\n'));
//! assert!(payload.as_str().contains(r#"docTypes: [\"CMPicture\"]"#));
//! ```

const ID_TOKEN: &str = "'id'";
const SITE_ID_TOKEN: &str = "'siteId'";
const TYPE_TOKEN: &str = "'type'";
const LIMIT_TOKEN: &str = "'limit'";

/// Upper bound on search results; there is no paging beyond it.
pub const SEARCH_LIMIT: usize = 1000;

const CONTENT_TEMPLATE: &str = r#"{"query" : "query {
  content {
    content(id:\"'id'\") {
       ... on CMTeasable {
          creationDate,
          name,
          title,
          type,
          link {id},
          teaserText,
          remoteLink,
          picture {
            data {
              size,
              contentType
            },
            uriTemplate,
            crops {
              name,
              minWidth
            }
          }
        }
    }
  }
}" }"#;

const SEARCH_TEMPLATE: &str = r#"{"query" : "query {
  content {
    search(query: \"*\", offset: 0, limit: 'limit', docTypes: [\"'type'\"], sortFields: [MODIFICATION_DATE_ASC], siteId: \"'siteId'\") {
     numFound,
     result {
       ... on CMTeasable {
          creationDate,
          name,
          title,
          type,
          link {id},
          teaserText,
          remoteLink,
          picture {
            data {
              size,
              contentType
            },
            uriTemplate,
            crops {
              name,
              minWidth
            }
          }
        }
      }
    }
  }
}" }"#;

/// A request body ready to be POSTed to the GraphQL endpoint.
///
/// Always a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPayload(String);

impl QueryPayload {
    /// Wrap rendered template text, folding line breaks into spaces.
    pub fn single_line(text: &str) -> Self {
        Self(text.replace(['\r', '\n'], " "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for QueryPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that renders to a GraphQL request body.
///
/// The connector only depends on this trait, so templated payloads can be
/// replaced by structured ones without touching it.
pub trait GraphQlQuery {
    /// Short label used in log lines.
    fn label(&self) -> &'static str;

    /// Render the request body.
    fn payload(&self) -> QueryPayload;
}

/// Fetch a single teasable content node by id.
#[derive(Debug, Clone)]
pub struct ContentQuery {
    id: String,
}

impl ContentQuery {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

impl GraphQlQuery for ContentQuery {
    fn label(&self) -> &'static str {
        "content"
    }

    fn payload(&self) -> QueryPayload {
        QueryPayload::single_line(&CONTENT_TEMPLATE.replace(ID_TOKEN, &self.id))
    }
}

/// Search all documents of one type within a site, oldest modification first.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    site_id: String,
    doc_type: String,
}

impl SearchQuery {
    pub fn new<S: Into<String>, T: Into<String>>(site_id: S, doc_type: T) -> Self {
        Self {
            site_id: site_id.into(),
            doc_type: doc_type.into(),
        }
    }
}

impl GraphQlQuery for SearchQuery {
    fn label(&self) -> &'static str {
        "search"
    }

    fn payload(&self) -> QueryPayload {
        let text = SEARCH_TEMPLATE
            .replace(SITE_ID_TOKEN, &self.site_id)
            .replace(TYPE_TOKEN, &self.doc_type)
            .replace(LIMIT_TOKEN, &SEARCH_LIMIT.to_string());
        QueryPayload::single_line(&text)
    }
}
