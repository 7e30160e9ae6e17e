//! In-memory store implementation for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};
use time::{Duration, OffsetDateTime};

use super::{ActivityStore, ProductionStore};
use crate::domain::{
    models::{
        completed_points, Activity, ActivityId, ActivityOrder, NewActivity, NewProduction,
        Production, ProductionId, ProductionListing,
    },
    ProgressError,
};

#[derive(Default)]
struct MockState {
    activities: BTreeMap<ActivityId, Activity>,
    productions: BTreeMap<ProductionId, Production>,
    next_id: i64,
}

impl MockState {
    fn next(&mut self) -> (i64, OffsetDateTime) {
        self.next_id += 1;
        let created_at = OffsetDateTime::UNIX_EPOCH + Duration::seconds(self.next_id);
        (self.next_id, created_at)
    }

    fn completed(&self, id: ActivityId) -> i64 {
        completed_points(
            self.productions
                .values()
                .filter(|p| p.activity_id == id)
                .map(|p| p.quantity),
        )
    }
}

/// Mock store backed by in-memory maps, implementing both storage ports
/// over shared state.
///
/// Writes can be made to fail with [`MockStore::fail_writes`] to exercise
/// storage error paths.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<MockState>>,
    fail_writes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write return a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn activity_count(&self) -> usize {
        self.state.read().unwrap().activities.len()
    }

    pub fn production_count(&self) -> usize {
        self.state.read().unwrap().productions.len()
    }

    /// Insert a production directly, bypassing activity validation.
    pub fn insert_raw_production(&self, activity_id: ActivityId, quantity: Option<i64>) {
        let mut state = self.state.write().unwrap();
        let (id, created_at) = state.next();
        state.productions.insert(
            ProductionId::new(id),
            Production {
                id: ProductionId::new(id),
                title: "raw".to_string(),
                quantity,
                description: None,
                activity_id,
                created_at,
            },
        );
    }

    fn check_writable(&self) -> Result<(), ProgressError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ProgressError::storage("write failed"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ActivityStore for MockStore {
    async fn insert(&self, activity: &NewActivity) -> Result<Activity, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        let (id, created_at) = state.next();
        let activity = Activity {
            id: ActivityId::new(id),
            name: activity.name.clone(),
            date: activity.date.clone(),
            description: activity.description.clone(),
            goal_points: activity.goal_points,
            created_at,
        };
        state.activities.insert(activity.id, activity.clone());
        Ok(activity)
    }

    async fn update(
        &self,
        id: ActivityId,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        Ok(state.activities.get_mut(&id).map(|existing| {
            existing.name = activity.name.clone();
            existing.date = activity.date.clone();
            existing.description = activity.description.clone();
            existing.goal_points = activity.goal_points;
            existing.clone()
        }))
    }

    async fn set_goal_points(
        &self,
        id: ActivityId,
        goal_points: i64,
    ) -> Result<bool, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        Ok(state
            .activities
            .get_mut(&id)
            .map(|existing| existing.goal_points = Some(goal_points))
            .is_some())
    }

    async fn delete(&self, id: ActivityId) -> Result<(), ProgressError> {
        self.check_writable()?;
        self.state.write().unwrap().activities.remove(&id);
        Ok(())
    }

    async fn get(&self, id: ActivityId) -> Result<Option<Activity>, ProgressError> {
        Ok(self.state.read().unwrap().activities.get(&id).cloned())
    }

    async fn get_with_completed(
        &self,
        id: ActivityId,
    ) -> Result<Option<(Activity, i64)>, ProgressError> {
        let state = self.state.read().unwrap();
        Ok(state
            .activities
            .get(&id)
            .map(|activity| (activity.clone(), state.completed(id))))
    }

    async fn list_with_completed(
        &self,
        order: ActivityOrder,
    ) -> Result<Vec<(Activity, i64)>, ProgressError> {
        let state = self.state.read().unwrap();
        let mut rows: Vec<_> = state
            .activities
            .values()
            .map(|activity| (activity.clone(), state.completed(activity.id)))
            .collect();

        match order {
            ActivityOrder::Newest => rows.sort_by(|(a, _), (b, _)| {
                b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
            }),
            ActivityOrder::ByName => {
                rows.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then(a.id.cmp(&b.id)))
            }
        }

        Ok(rows)
    }

    async fn delete_with_productions(
        &self,
        id: ActivityId,
    ) -> Result<Option<String>, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        let Some(activity) = state.activities.remove(&id) else {
            return Ok(None);
        };
        state.productions.retain(|_, p| p.activity_id != id);
        Ok(Some(activity.name))
    }
}

#[async_trait]
impl ProductionStore for MockStore {
    async fn insert(&self, production: &NewProduction) -> Result<Production, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        let (id, created_at) = state.next();
        let production = Production {
            id: ProductionId::new(id),
            title: production.title.clone(),
            quantity: production.quantity,
            description: production.description.clone(),
            activity_id: production.activity_id,
            created_at,
        };
        state.productions.insert(production.id, production.clone());
        Ok(production)
    }

    async fn update(
        &self,
        id: ProductionId,
        production: &NewProduction,
    ) -> Result<Option<Production>, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        Ok(state.productions.get_mut(&id).map(|existing| {
            existing.title = production.title.clone();
            existing.quantity = production.quantity;
            existing.description = production.description.clone();
            existing.activity_id = production.activity_id;
            existing.clone()
        }))
    }

    async fn delete(&self, id: ProductionId) -> Result<(), ProgressError> {
        self.check_writable()?;
        self.state.write().unwrap().productions.remove(&id);
        Ok(())
    }

    async fn get(&self, id: ProductionId) -> Result<Option<Production>, ProgressError> {
        Ok(self.state.read().unwrap().productions.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ProductionListing>, ProgressError> {
        let state = self.state.read().unwrap();
        let mut listings: Vec<_> = state
            .productions
            .values()
            .map(|production| ProductionListing {
                production: production.clone(),
                activity_name: state
                    .activities
                    .get(&production.activity_id)
                    .map(|a| a.name.clone()),
            })
            .collect();
        listings.sort_by(|a, b| {
            b.production
                .created_at
                .cmp(&a.production.created_at)
                .then(b.production.id.cmp(&a.production.id))
        });
        Ok(listings)
    }

    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<Production>, ProgressError> {
        let state = self.state.read().unwrap();
        let mut productions: Vec<_> = state
            .productions
            .values()
            .filter(|p| p.activity_id == activity_id)
            .cloned()
            .collect();
        productions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(productions)
    }

    async fn sum_quantity(&self, activity_id: ActivityId) -> Result<i64, ProgressError> {
        Ok(self.state.read().unwrap().completed(activity_id))
    }

    async fn delete_for_activity(&self, activity_id: ActivityId) -> Result<u64, ProgressError> {
        self.check_writable()?;
        let mut state = self.state.write().unwrap();
        let before = state.productions.len();
        state.productions.retain(|_, p| p.activity_id != activity_id);
        Ok((before - state.productions.len()) as u64)
    }
}
