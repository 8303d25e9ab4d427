use crate::api::PropertyApi;
use crate::models::{Property, PropertyId};
use crate::sync::form::FormState;
use crate::view::{ConfirmPrompt, TableView};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// The last server state this client has seen. A transient projection,
/// rebuilt from a fresh fetch after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub rows: Vec<Property>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Owns the contract "rendered table == last fetched server snapshot".
///
/// Every mutating operation (create, update, delete) is followed by an
/// unconditional full reload of the list. No diffing, no optimistic
/// updates, no client-side cache with authority.
pub struct PropertyListSynchronizer<V: TableView, C: ConfirmPrompt> {
    api: Box<dyn PropertyApi>,
    view: V,
    confirm: C,
    form: FormState,
    snapshot: Snapshot,
}

impl<V: TableView, C: ConfirmPrompt> PropertyListSynchronizer<V, C> {
    pub fn new(api: Box<dyn PropertyApi>, view: V, confirm: C) -> Self {
        Self {
            api,
            view,
            confirm,
            form: FormState::default(),
            snapshot: Snapshot::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Fetch the full collection and replace the entire table view,
    /// one row per item in server order.
    pub async fn load_properties(&mut self) -> Result<()> {
        let rows = self.api.list().await?;
        debug!("Loaded {} properties", rows.len());

        self.view.replace_rows(&rows);
        self.snapshot = Snapshot {
            rows,
            fetched_at: Some(Utc::now()),
        };
        Ok(())
    }

    /// Submit the form as a new record, then clear the form and reload.
    /// A form parse failure aborts before any request is sent.
    pub async fn create_property(&mut self) -> Result<()> {
        let draft = self.form.form_data()?;
        self.api.create(&draft).await?;
        info!("Created property at {}", draft.address);

        self.form.reset();
        self.load_properties().await
    }

    /// Fetch one record and load its values into the form for editing.
    pub async fn edit_property(&mut self, id: PropertyId) -> Result<()> {
        let property = self.api.get(id).await?;
        self.form.fill(&property);
        Ok(())
    }

    /// Submit the form as a replacement for the record at `id`,
    /// then clear the form and reload.
    pub async fn update_property(&mut self, id: PropertyId) -> Result<()> {
        let draft = self.form.form_data()?;
        self.api.update(id, &draft).await?;
        info!("Updated property {}", id);

        self.form.reset();
        self.load_properties().await
    }

    /// Delete after interactive confirmation. A declined prompt performs
    /// no request and no reload.
    pub async fn delete_property(&mut self, id: PropertyId) -> Result<()> {
        let message = format!("Are you sure you want to delete property {}?", id);
        if !self.confirm.confirm(&message) {
            debug!("Delete of property {} cancelled", id);
            return Ok(());
        }

        self.api.delete(id).await?;
        info!("Deleted property {}", id);

        self.load_properties().await
    }

    /// Create or update depending on whether the form carries an
    /// identifier from a prior edit. This is the whole form state machine.
    pub async fn submit(&mut self) -> Result<()> {
        match self.form.property_id() {
            Some(id) => self.update_property(id).await,
            None => self.create_property().await,
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }
}
