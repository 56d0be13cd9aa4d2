//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the composite unique index guarding the assignment `(affair_id, attorney_id)` pair.
pub static IDX_ASSIGNMENT_AFFAIR_ID_ATTORNEY_ID: &str = "idx-assignment-affair_id-attorney_id";

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// record fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_record_tables: bool,

    // Database fixtures to insert
    clients: Vec<String>,               // dni
    attorneys: Vec<String>,             // dni
    affairs: Vec<(String, String)>,     // (file_number, client dni)
    assignments: Vec<(String, String)>, // (affair file_number, attorney dni)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_record_tables: false,
            clients: Vec::new(),
            attorneys: Vec::new(),
            affairs: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Add the client, attorney, affair and assignment tables to the test database.
    ///
    /// Also creates the composite unique index on the assignment pair, which the
    /// production schema defines in its migration.
    pub fn with_record_tables(mut self) -> Self {
        self.include_record_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bufete_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bufete_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Client).with_table(Affair).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock client with the provided dni into the database.
    pub fn with_mock_client(mut self, dni: impl Into<String>) -> Self {
        self.clients.push(dni.into());
        self
    }

    /// Insert mock attorney with the provided dni into the database.
    pub fn with_mock_attorney(mut self, dni: impl Into<String>) -> Self {
        self.attorneys.push(dni.into());
        self
    }

    /// Insert mock affair owned by the client with `client_dni`.
    ///
    /// The client is created automatically if it was not declared with `with_mock_client`.
    pub fn with_mock_affair(
        mut self,
        file_number: impl Into<String>,
        client_dni: impl Into<String>,
    ) -> Self {
        self.affairs.push((file_number.into(), client_dni.into()));
        self
    }

    /// Insert an assignment linking a declared affair to the attorney with `attorney_dni`.
    ///
    /// The attorney is created automatically if it was not declared with `with_mock_attorney`.
    pub fn with_mock_assignment(
        mut self,
        file_number: impl Into<String>,
        attorney_dni: impl Into<String>,
    ) -> Self {
        self.assignments
            .push((file_number.into(), attorney_dni.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (record tables if specified, then custom tables)
    /// 2. Inserts fixtures (clients, attorneys, affairs, assignments)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_record_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Attorney),
                schema.create_table_from_entity(entity::prelude::Affair),
                schema.create_table_from_entity(entity::prelude::Assignment),
            ]);
            all_indexes.push(assignment_pair_index());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        // 2. Insert database fixtures
        let mut client_ids: HashMap<String, i32> = HashMap::new();
        let mut attorney_ids: HashMap<String, i32> = HashMap::new();
        let mut affair_ids: HashMap<String, i32> = HashMap::new();

        for dni in self.clients {
            let client = setup.client().insert_mock_client(&dni).await?;
            client_ids.insert(dni, client.id);
        }

        for dni in self.attorneys {
            let attorney = setup.attorney().insert_mock_attorney(&dni).await?;
            attorney_ids.insert(dni, attorney.id);
        }

        for (file_number, client_dni) in self.affairs {
            let client_id = match client_ids.get(&client_dni) {
                Some(id) => *id,
                None => {
                    let client = setup.client().insert_mock_client(&client_dni).await?;
                    client_ids.insert(client_dni, client.id);
                    client.id
                }
            };

            let affair = setup
                .affair()
                .insert_mock_affair(&file_number, client_id)
                .await?;
            affair_ids.insert(file_number, affair.id);
        }

        for (file_number, attorney_dni) in self.assignments {
            let Some(affair_id) = affair_ids.get(&file_number).copied() else {
                return Err(TestError::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                    "Mock assignment references undeclared affair {}",
                    file_number
                ))));
            };

            let attorney_id = match attorney_ids.get(&attorney_dni) {
                Some(id) => *id,
                None => {
                    let attorney = setup.attorney().insert_mock_attorney(&attorney_dni).await?;
                    attorney_ids.insert(attorney_dni, attorney.id);
                    attorney.id
                }
            };

            setup
                .assignment()
                .insert_assignment(affair_id, attorney_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn assignment_pair_index() -> IndexCreateStatement {
    Index::create()
        .name(IDX_ASSIGNMENT_AFFAIR_ID_ATTORNEY_ID)
        .table(entity::prelude::Assignment)
        .col(entity::assignment::Column::AffairId)
        .col(entity::assignment::Column::AttorneyId)
        .unique()
        .to_owned()
}
