//! Render passes over the comparison table.
//!
//! Every `render` starts a new pass with a fresh generation number and one
//! tokio task per note. Tasks report back over a channel; updates from an
//! older pass are dropped, so a reload or resize while reads are still in
//! flight never mixes old content into the new table. Once the view is
//! dropped the channel closes and late tasks finish without effect.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::ComparatorSettings;
use crate::diary::build_index;
use crate::excerpt::HeadingMatcher;
use crate::vault::NoteRef;

use super::reader::{NoteReader, load_cell};
use super::table::ComparisonTable;
use super::types::{CellUpdate, TableLayout};

pub struct ComparisonView<F> {
    settings: ComparatorSettings,
    generation: u64,
    table: Option<ComparisonTable<F>>,
    tx: UnboundedSender<CellUpdate>,
    rx: UnboundedReceiver<CellUpdate>,
}

impl<F> ComparisonView<F>
where
    F: NoteRef + Clone + Send + Sync + 'static,
{
    pub fn new(settings: ComparatorSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { settings, generation: 0, table: None, tx, rx }
    }

    /// Start a new pass over `files`, returning its generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn render<R: NoteReader<F>>(&mut self, files: &[F], reader: Arc<R>) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        let index = build_index(files);
        let table = ComparisonTable::from_index(&index);
        let matcher = HeadingMatcher::new(&self.settings.heading_keyword);

        for (row, column, note) in table.loading_cells() {
            let note = note.clone();
            let reader = Arc::clone(&reader);
            let matcher = matcher.clone();
            let tx = self.tx.clone();
            tokio::spawn(async move {
                let outcome = load_cell(reader.as_ref(), &note, &matcher).await;
                // The view may be gone by now
                let _ = tx.send(CellUpdate { generation, row, column, outcome });
            });
        }

        tracing::debug!(
            "render pass {generation}: {} years, {} notes to load",
            table.years().len(),
            table.pending()
        );
        self.table = Some(table);
        generation
    }

    /// Apply one update; returns false when it belongs to a stale pass.
    pub fn apply(&mut self, update: CellUpdate) -> bool {
        if update.generation != self.generation {
            tracing::trace!(
                "dropping update from pass {} (current {})",
                update.generation,
                self.generation
            );
            return false;
        }
        match self.table.as_mut() {
            Some(table) => table.resolve(update.row, update.column, update.outcome),
            None => false,
        }
    }

    /// Apply whatever updates have already arrived without waiting.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.rx.try_recv() {
            if self.apply(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until every cell of the current pass has settled.
    pub async fn settle(&mut self) {
        while self.pending() > 0 {
            match self.rx.recv().await {
                Some(update) => {
                    self.apply(update);
                }
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.table.as_ref().map_or(0, ComparisonTable::pending)
    }
}

impl<F> ComparisonView<F> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn table(&self) -> Option<&ComparisonTable<F>> {
        self.table.as_ref()
    }

    pub fn settings(&self) -> &ComparatorSettings {
        &self.settings
    }

    pub fn layout(&self) -> TableLayout {
        let years = self.table.as_ref().map_or(0, |t| t.years().len());
        TableLayout::new(self.settings.column_width, years)
    }

    /// Tear the view down; in-flight reads complete into a closed channel.
    pub fn close(self) -> Option<ComparisonTable<F>> {
        self.table
    }
}
