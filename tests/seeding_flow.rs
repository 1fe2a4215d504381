//! End-to-end seeding flow over an in-memory store: recipe-driven scenario
//! seeders, consistent reseeding, and find-or-create idempotence.

use std::sync::{Arc, Mutex};

use seedkit::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: Option<i64>,
    email: Option<String>,
    name: Option<String>,
}

impl User {
    fn column(&self, name: &str) -> Option<JsonValue> {
        match name {
            "email" => self.email.clone().map(JsonValue::from),
            "name" => self.name.clone().map(JsonValue::from),
            _ => None,
        }
    }
}

/// Cheap-clone handle over shared table state, the way a connection pool
/// handle clones.
#[derive(Clone, Default)]
struct MemoryDb {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryDb {
    fn insert(&self, mut user: User) {
        let mut users = self.users.lock().unwrap();
        user.id = Some(users.len() as i64 + 1);
        users.push(user);
    }

    fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn emails(&self) -> Vec<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter_map(|user| user.email.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl SeedModel for User {
    type Conn = MemoryDb;

    fn table_name() -> &'static str {
        "users"
    }

    async fn find_first(conn: &MemoryDb, filters: &[Equals]) -> SeedResult<Option<User>> {
        let users = conn.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|user| {
                filters
                    .iter()
                    .all(|filter| user.column(&filter.column).as_ref() == Some(&filter.value))
            })
            .cloned())
    }

    fn new_record() -> Self {
        User {
            id: None,
            email: None,
            name: None,
        }
    }

    fn set_column(&mut self, column: &str, value: JsonValue) -> SeedResult<()> {
        match column {
            "email" => self.email = value.as_str().map(str::to_string),
            "name" => self.name = value.as_str().map(str::to_string),
            other => return Err(SeedError::unknown_column(Self::table_name(), other)),
        }
        Ok(())
    }
}

#[derive(Debug)]
struct StaffRecipe {
    staff_count: usize,
}

impl Default for StaffRecipe {
    fn default() -> Self {
        Self { staff_count: 3 }
    }
}

impl Recipe for StaffRecipe {}

struct StaffScenario {
    recipe: StaffRecipe,
}

impl StaffScenario {
    fn new(recipe: StaffRecipe) -> Self {
        Self { recipe }
    }
}

#[async_trait::async_trait]
impl ScenarioSeeder<MemoryDb> for StaffScenario {
    fn scenario_name(&self) -> &str {
        "StaffScenario"
    }

    async fn seed(&self, cx: &mut SeedingContext<MemoryDb>) -> SeedResult<()> {
        for _ in 0..self.recipe.staff_count {
            let email = cx.generator_mut().email();
            let name = cx.generator_mut().full_name();

            let mut user: User = cx
                .factory()
                .find_or_create_by_columns(&[("email", json!(email))])
                .await?;

            if user.id.is_none() {
                user.set_column("name", json!(name))?;
                cx.conn().insert(user);
            }
        }
        Ok(())
    }
}

fn context(db: MemoryDb) -> SeedingContext<MemoryDb> {
    SeedingContext::new(FakeGenerator::new(Locale::EnGb), db)
}

#[tokio::test]
async fn test_two_runs_produce_identical_data() {
    let first_db = MemoryDb::default();
    let mut cx = context(first_db.clone());
    ScenarioRunner::new()
        .add(StaffScenario::new(StaffRecipe::create()))
        .run_all(&mut cx)
        .await
        .unwrap();

    let second_db = MemoryDb::default();
    let mut cx = context(second_db.clone());
    ScenarioRunner::new()
        .add(StaffScenario::new(StaffRecipe::create()))
        .run_all(&mut cx)
        .await
        .unwrap();

    assert_eq!(first_db.emails(), second_db.emails());
}

#[tokio::test]
async fn test_rerunning_against_same_store_creates_no_duplicates() {
    let db = MemoryDb::default();

    let mut cx = context(db.clone());
    cx.run(&StaffScenario::new(StaffRecipe::create()))
        .await
        .unwrap();
    let after_first = db.count();
    assert_eq!(after_first, 3);

    // A fresh context, as a separate process invocation would have.
    let mut cx = context(db.clone());
    cx.run(&StaffScenario::new(StaffRecipe::create()))
        .await
        .unwrap();

    assert_eq!(db.count(), after_first);
}

#[tokio::test]
async fn test_recipe_controls_row_count() {
    let db = MemoryDb::default();
    let mut cx = context(db.clone());

    cx.run(&StaffScenario::new(StaffRecipe { staff_count: 5 }))
        .await
        .unwrap();

    assert_eq!(db.count(), 5);
}

#[tokio::test]
async fn test_preexisting_records_are_left_untouched() {
    let db = MemoryDb::default();
    let mut cx = context(db.clone());
    cx.run(&StaffScenario::new(StaffRecipe::create()))
        .await
        .unwrap();

    let before = db.users.lock().unwrap().clone();

    let mut cx = context(db.clone());
    cx.run(&StaffScenario::new(StaffRecipe::create()))
        .await
        .unwrap();

    assert_eq!(*db.users.lock().unwrap(), before);
}
