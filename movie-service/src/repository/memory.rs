//! In-memory movie gateway for service and handler tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use super::pagination::{Page, PageRequest};
use super::traits::{check_id, MovieRepository, RepositoryResult};
use crate::ids::MovieId;
use crate::models::{validate, validate_patch, Movie, MovieDocument, MovieInput};

/// Keeps records in a `BTreeMap` keyed by ID, so iteration follows creation order
#[derive(Default)]
pub struct InMemoryMovieRepository {
    records: Mutex<BTreeMap<String, MovieDocument>>,
    failing: AtomicBool,
    dropping_writes: AtomicBool,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make `create` report that the store did not keep the record
    pub fn drop_writes(&self) {
        self.dropping_writes.store(true, Ordering::SeqCst);
    }

    /// Insert a record directly, bypassing validation
    pub fn insert_raw(&self, id: &str, document: MovieDocument) {
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), document);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn guard(&self, operation: RepositoryOperation) -> RepositoryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::new(
                operation,
                RepositoryErrorKind::ConnectionFailed,
                "connection refused",
            ))
        } else {
            Ok(())
        }
    }
}

impl MovieRepository for InMemoryMovieRepository {
    async fn list(&self, request: PageRequest) -> RepositoryResult<Page<Movie>> {
        self.guard(RepositoryOperation::List)?;
        let records = self.records.lock().unwrap();
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.limit).unwrap_or(usize::MAX);

        let items = records
            .iter()
            .skip(skip)
            .take(take)
            .map(|(id, doc)| Movie::new(id.clone(), doc.clone()))
            .collect();

        Ok(Page::new(items, records.len() as u64, request))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Movie>> {
        self.guard(RepositoryOperation::FindAll)?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|(id, doc)| Movie::new(id.clone(), doc.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Movie>> {
        self.guard(RepositoryOperation::FindById)?;
        check_id(id)?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(id)
            .map(|doc| Movie::new(id, doc.clone())))
    }

    async fn create(&self, input: MovieInput) -> RepositoryResult<Movie> {
        let op = RepositoryOperation::Create;
        self.guard(op)?;
        let document = validate(input).map_err(|e| RepositoryError::validation_failed(op, &e))?;
        let id = MovieId::new().to_string();
        if self.dropping_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::not_persisted(op, id));
        }

        self.records
            .lock()
            .unwrap()
            .insert(id.clone(), document.clone());
        Ok(Movie::new(id, document))
    }

    async fn update_by_id(&self, id: &str, patch: MovieInput) -> RepositoryResult<Option<Movie>> {
        let op = RepositoryOperation::Update;
        self.guard(op)?;
        check_id(id)?;

        let mut records = self.records.lock().unwrap();
        let Some(existing) = records.get_mut(id) else {
            return Ok(None);
        };
        let document = validate_patch(existing, patch)
            .map_err(|e| RepositoryError::validation_failed(op, &e).with_entity(id))?;
        *existing = document.clone();

        Ok(Some(Movie::new(id, document)))
    }

    async fn delete_by_id(&self, id: &str) -> RepositoryResult<Option<Movie>> {
        self.guard(RepositoryOperation::Delete)?;
        check_id(id)?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .remove(id)
            .map(|doc| Movie::new(id, doc)))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.guard(RepositoryOperation::Ping)
    }
}
