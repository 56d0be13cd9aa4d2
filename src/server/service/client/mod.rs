//! Client service.
//!
//! Creates, updates and deletes clients inside a transaction, enforcing the dni
//! uniqueness & field rules and cascading deletes to the client's affairs.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        client::{ClientDto, ClientParams},
    },
    server::{
        data::client::ClientRepository,
        error::{
            record::NotFoundError,
            validation::{reclassify_unique_violation, UniqueGuard},
            Error,
        },
        model::db::ClientModel,
        service::cascade::CascadeDelete,
        validation::client::{validate_client, ClientSnapshot},
    },
};

static CLIENT_UNIQUE_GUARDS: &[UniqueGuard] = &[UniqueGuard {
    column: "dni",
    field: "dni",
}];

impl From<ClientModel> for ClientDto {
    fn from(client: ClientModel) -> Self {
        Self {
            id: client.id,
            dni: client.dni,
            full_name: client.full_name,
            address: client.address,
            nacionality: client.nacionality,
            birthdate: client.birthdate,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// Service for managing clients.
pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    /// Creates a new instance of [`ClientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of clients ordered by ID.
    pub async fn get_page(&self, page: u64) -> Result<PageDto<ClientDto>, Error> {
        let page = ClientRepository::new(self.db).get_page(page).await?;

        Ok(page.map(ClientDto::from))
    }

    /// Retrieves a client by ID.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The client
    /// - `Err(Error::NotFound)` - No client has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, client_id: i32) -> Result<ClientDto, Error> {
        let client = ClientRepository::new(self.db)
            .get_by_id(client_id)
            .await?
            .ok_or(NotFoundError::client(client_id))?;

        Ok(client.into())
    }

    /// Creates a client.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The persisted client
    /// - `Err(Error::ValidationError)` - One or more fields are invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: ClientParams) -> Result<ClientDto, Error> {
        let txn = self.db.begin().await?;
        let client_repo = ClientRepository::new(&txn);

        let snapshot = ClientSnapshot {
            dni_holder: match params.dni.as_deref() {
                Some(dni) => client_repo.find_by_dni(dni).await?.map(|c| c.id),
                None => None,
            },
        };
        let client = validate_client(&params, None, &snapshot)?;

        let client = client_repo
            .create(&client)
            .await
            .map_err(|e| reclassify_unique_violation(e, CLIENT_UNIQUE_GUARDS))?;

        txn.commit().await?;

        tracing::info!(client_id = %client.id, "Created client");

        Ok(client.into())
    }

    /// Overwrites the attributes of a client.
    ///
    /// Keeping the client's own dni never collides with itself.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The updated client
    /// - `Err(Error::NotFound)` - No client has the provided ID
    /// - `Err(Error::ValidationError)` - One or more fields are invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, client_id: i32, params: ClientParams) -> Result<ClientDto, Error> {
        let txn = self.db.begin().await?;
        let client_repo = ClientRepository::new(&txn);

        if client_repo.get_by_id(client_id).await?.is_none() {
            return Err(NotFoundError::client(client_id).into());
        }

        let snapshot = ClientSnapshot {
            dni_holder: match params.dni.as_deref() {
                Some(dni) => client_repo.find_by_dni(dni).await?.map(|c| c.id),
                None => None,
            },
        };
        let client = validate_client(&params, Some(client_id), &snapshot)?;

        let client = client_repo
            .update(client_id, &client)
            .await
            .map_err(|e| reclassify_unique_violation(e, CLIENT_UNIQUE_GUARDS))?
            .ok_or(NotFoundError::client(client_id))?;

        txn.commit().await?;

        tracing::info!(client_id = %client.id, "Updated client");

        Ok(client.into())
    }

    /// Deletes a client together with its affairs and their assignments.
    ///
    /// Either every row is deleted or none is.
    ///
    /// # Returns
    /// - `Ok(())` - The client and its dependents were deleted
    /// - `Err(Error::NotFound)` - No client has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, client_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if !CascadeDelete::new(&txn).client(client_id).await? {
            return Err(NotFoundError::client(client_id).into());
        }

        txn.commit().await?;

        tracing::info!(client_id = %client_id, "Deleted client");

        Ok(())
    }
}
