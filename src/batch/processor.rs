use futures::{stream, StreamExt, TryStreamExt};
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::{
    error::Result,
    lookup::{extract_bin, BinLookup},
    report::format_record,
    utils::mask_card,
};

/// Outcome of one card when failures are collected instead of aborting.
#[derive(Debug)]
pub struct ItemOutcome {
    pub card: String,
    pub result: Result<String>,
}

/// Runs cards through prefix extraction, lookup and formatting.
pub struct BatchProcessor<L> {
    lookup: L,
    progress: Option<ProgressBar>,
}

impl<L: BinLookup> BatchProcessor<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            progress: None,
        }
    }

    /// Advance `progress` once per finished card.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Look up one card and render its record.
    pub async fn check_card(&self, card: &str) -> Result<String> {
        let bin = extract_bin(card);
        debug!("Checking card {} (BIN {})", mask_card(card), bin);

        let response = self.lookup.lookup(bin).await.map_err(|e| {
            warn!("Lookup failed for card {}: {}", mask_card(card), e);
            e
        })?;

        if let Some(progress) = &self.progress {
            progress.inc(1);
        }

        Ok(format_record(card, &response))
    }

    /// Process cards one after another, in order.
    ///
    /// The first failing lookup aborts the whole batch; no partial results
    /// are returned.
    pub async fn process(&self, cards: &[String]) -> Result<Vec<String>> {
        info!("Processing batch of {} cards", cards.len());

        let mut records = Vec::with_capacity(cards.len());
        for card in cards {
            records.push(self.check_card(card).await?);
        }

        info!("Batch complete: {} records", records.len());
        Ok(records)
    }

    /// Process every card, keeping each card's failure instead of aborting.
    pub async fn process_each(&self, cards: &[String]) -> Vec<ItemOutcome> {
        info!("Processing batch of {} cards (collecting failures)", cards.len());

        let mut outcomes = Vec::with_capacity(cards.len());
        for card in cards {
            let result = self.check_card(card).await;
            if result.is_err() {
                // a failed card still counts as handled
                if let Some(progress) = &self.progress {
                    progress.inc(1);
                }
            }
            outcomes.push(ItemOutcome {
                card: card.clone(),
                result,
            });
        }

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(
            "Batch complete: {} succeeded, {} failed",
            outcomes.len() - failed,
            failed
        );
        outcomes
    }

    /// Like [`process`](Self::process) but with up to `limit` lookups in
    /// flight. Records come back in input order and the first fault still
    /// aborts the batch.
    pub async fn process_concurrent(&self, cards: &[String], limit: usize) -> Result<Vec<String>> {
        if limit <= 1 {
            return self.process(cards).await;
        }

        info!(
            "Processing batch of {} cards, {} lookups at a time",
            cards.len(),
            limit
        );

        let records: Vec<String> = stream::iter(cards)
            .map(|card| self.check_card(card))
            .buffered(limit)
            .try_collect()
            .await?;

        info!("Batch complete: {} records", records.len());
        Ok(records)
    }
}
