// src/services/session_service.rs
//
// Per-session search state.
//
// The original design kept the last filtered result list in a single
// process-wide slot, so every browsing session overwrote every other
// one. Here each session id owns its own entry, and the entry stores
// the criterion rather than the computed results: `view` recomputes
// filter + paginate against the current catalog on every call, so a
// catalog reload is never served stale films.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{filter, paginate, Film, FilterCriterion, Page, PageRequest};
use crate::error::AppResult;
use crate::repositories::CatalogRepository;

/// A session's most recent search submission.
#[derive(Debug, Clone)]
pub struct StoredSearch {
    pub criterion: FilterCriterion,
    pub submitted_at: DateTime<Utc>,
}

pub struct SearchSessionService {
    catalog_repo: Arc<dyn CatalogRepository>,
    sessions: RwLock<HashMap<Uuid, StoredSearch>>,
}

impl SearchSessionService {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog_repo,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Record the session's search criterion, replacing any previous
    /// one for that session only. Does not compute results.
    pub fn submit(&self, session: Uuid, criterion: FilterCriterion) {
        log::info!("session {} submitted {}", session, criterion);
        self.sessions.write().unwrap().insert(
            session,
            StoredSearch {
                criterion,
                submitted_at: Utc::now(),
            },
        );
    }

    /// Paginated view of the session's last search, recomputed against
    /// the current catalog. A session with no prior submit observes an
    /// empty result list, paginated like any other: the offset still
    /// follows the requested page number.
    pub fn view(&self, session: Uuid, request: PageRequest) -> AppResult<Page<Film>> {
        let criterion = self
            .sessions
            .read()
            .unwrap()
            .get(&session)
            .map(|s| s.criterion.clone());

        let Some(criterion) = criterion else {
            return Ok(paginate(&[] as &[Film], request));
        };

        let catalog = self.catalog_repo.load()?;
        let matches = filter(&catalog, &criterion);
        Ok(paginate(&matches, request))
    }

    /// The criterion the session last submitted, if any.
    pub fn last_criterion(&self, session: Uuid) -> Option<FilterCriterion> {
        self.sessions
            .read()
            .unwrap()
            .get(&session)
            .map(|s| s.criterion.clone())
    }

    /// Drop entries submitted before the cutoff. Returns how many were
    /// removed. Cleanup is explicit; nothing expires on its own.
    pub fn purge_older_than(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.submitted_at >= cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            log::info!("purged {} stale search sessions", removed);
        }
        removed
    }
}
