use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::{
    authority::LedgerAuthority,
    clock::{Clock, SystemClock},
    config::ControllerConfig,
    content::{ContentStore, MetadataDocument},
    error::{ControllerError, Result},
    lifecycle,
    locks::LotLocks,
    lot::{ListingStatus, LotView},
};

/// User-facing operations, as reported in notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Mint,
    UploadMedia,
    SetSale,
    SetRent,
    SetUnavailable,
    BuyLot,
    RentLot,
    ClientEndRent,
    LenderEndRent,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Mint => "mint",
            Action::UploadMedia => "upload_media",
            Action::SetSale => "set_sale",
            Action::SetRent => "set_rent",
            Action::SetUnavailable => "set_unavailable",
            Action::BuyLot => "buy_lot",
            Action::RentLot => "rent_lot",
            Action::ClientEndRent => "client_end_rent",
            Action::LenderEndRent => "lender_end_rent",
        };
        f.write_str(name)
    }
}

/// Outcome of a finished operation, published to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Succeeded {
        action: Action,
        index: Option<u32>,
    },
    Failed {
        action: Action,
        index: Option<u32>,
        reason: String,
    },
}

impl Notice {
    pub fn action(&self) -> Action {
        match self {
            Notice::Succeeded { action, .. } | Notice::Failed { action, .. } => *action,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Succeeded { .. })
    }
}

/// Fields of a new lot, as entered by its lender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotDraft {
    pub location: String,
    pub description: String,
    /// Locator returned by [`ListingController::upload_media`]
    pub image: String,
    /// Display name of the minting account, stored in the metadata document
    pub owner: Option<String>,
}

/// Cached listing tagged with the reload that produced it.
struct Snapshot<I> {
    generation: u64,
    views: Vec<LotView<I>>,
}

pub struct ListingController<A, C, K = SystemClock>
where
    A: LedgerAuthority,
{
    authority: A,
    content: C,
    clock: K,
    config: ControllerConfig,
    locks: LotLocks,
    listings: RwLock<Snapshot<A::Identity>>,
    reloads: AtomicU64,
    notices: broadcast::Sender<Notice>,
}

impl<A, C> ListingController<A, C, SystemClock>
where
    A: LedgerAuthority,
    C: ContentStore,
{
    pub fn new(authority: A, content: C, config: ControllerConfig) -> Self {
        Self::with_clock(authority, content, SystemClock, config)
    }
}

impl<A, C, K> ListingController<A, C, K>
where
    A: LedgerAuthority,
    C: ContentStore,
    K: Clock,
{
    pub fn with_clock(authority: A, content: C, clock: K, config: ControllerConfig) -> Self {
        let (notices, _) = broadcast::channel(config.notice_capacity.max(1));
        Self {
            authority,
            content,
            clock,
            config,
            locks: LotLocks::new(),
            listings: RwLock::new(Snapshot {
                generation: 0,
                views: Vec::new(),
            }),
            reloads: AtomicU64::new(0),
            notices,
        }
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Snapshot of the listing as of the last reload.
    pub fn listings(&self) -> Vec<LotView<A::Identity>> {
        self.listings.read().views.clone()
    }

    pub fn listing(&self, index: u32) -> Option<LotView<A::Identity>> {
        self.listings
            .read()
            .views
            .iter()
            .find(|view| view.lot.index == index)
            .cloned()
    }

    /// Replace the cached listing with a full read from the authority.
    ///
    /// Metadata documents that cannot be fetched are left empty. A reload
    /// that finishes after a later-started one still returns its views but
    /// leaves the cache alone.
    pub async fn reload(&self) -> Result<Vec<LotView<A::Identity>>> {
        let generation = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        let count = self.authority.lot_count().await?;
        let mut views = Vec::with_capacity(count as usize);
        for index in 0..count {
            let lot = self.authority.lot(index).await?;
            let locator = self.authority.metadata_locator(index).await?;
            let metadata = match self.content.document(&locator).await {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!("metadata for lot {} at {} unavailable: {}", index, locator, err);
                    None
                }
            };
            views.push(LotView {
                lot,
                locator,
                metadata,
            });
        }
        let mut cache = self.listings.write();
        if generation > cache.generation {
            debug!("reloaded {} lots (generation {})", count, generation);
            cache.generation = generation;
            cache.views = views.clone();
        } else {
            debug!(
                "reload {} superseded by generation {}",
                generation, cache.generation
            );
        }
        Ok(views)
    }

    /// Store an image ahead of minting; returns its locator.
    pub async fn upload_media(&self, bytes: Vec<u8>) -> Result<String> {
        let outcome = self
            .content
            .put(bytes)
            .await
            .map_err(ControllerError::from);
        self.publish(Action::UploadMedia, None, &outcome);
        outcome
    }

    /// Store the lot's metadata document and mint it for the current fee.
    pub async fn mint(&self, caller: &A::Identity, draft: LotDraft) -> Result<u32> {
        let outcome = self.mint_lot(caller, draft).await;
        let index = outcome.as_ref().ok().copied();
        self.finish(Action::Mint, index, outcome).await
    }

    pub async fn set_sale(&self, caller: &A::Identity, index: u32, price: i128) -> Result<()> {
        let outcome = self.list_for_sale(caller, index, price).await;
        self.finish(Action::SetSale, Some(index), outcome).await
    }

    pub async fn set_rent(
        &self,
        caller: &A::Identity,
        index: u32,
        price: i128,
        deposit_percent: u32,
    ) -> Result<()> {
        let outcome = self
            .list_for_rent(caller, index, price, deposit_percent)
            .await;
        self.finish(Action::SetRent, Some(index), outcome).await
    }

    pub async fn set_unavailable(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let outcome = self.delist(caller, index).await;
        self.finish(Action::SetUnavailable, Some(index), outcome).await
    }

    /// Buy a lot at its current sale price.
    pub async fn buy_lot(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let outcome = self.buy(caller, index).await;
        self.finish(Action::BuyLot, Some(index), outcome).await
    }

    /// Rent a lot for `duration` seconds at the authority's quoted cost.
    pub async fn rent_lot(&self, caller: &A::Identity, index: u32, duration: u64) -> Result<()> {
        let outcome = self.rent(caller, index, duration).await;
        self.finish(Action::RentLot, Some(index), outcome).await
    }

    /// Return a rented lot, attaching what the authority quotes for
    /// `elapsed` seconds of rent.
    pub async fn client_end_rent(
        &self,
        caller: &A::Identity,
        index: u32,
        elapsed: u64,
    ) -> Result<()> {
        let outcome = self.return_lot(caller, index, elapsed).await;
        self.finish(Action::ClientEndRent, Some(index), outcome).await
    }

    pub async fn lender_end_rent(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let outcome = self.reclaim(caller, index).await;
        self.finish(Action::LenderEndRent, Some(index), outcome).await
    }

    async fn mint_lot(&self, caller: &A::Identity, draft: LotDraft) -> Result<u32> {
        lifecycle::check_metadata(&draft.location, &draft.description, &draft.image)?;
        let document = MetadataDocument {
            location: draft.location,
            description: draft.description,
            image: draft.image,
            owner: draft.owner,
        };
        let locator = self.content.put(document.to_bytes()?).await?;
        let fee = self.authority.mint_fee().await?;
        debug!("minting lot at {} for fee {}", locator, fee);
        Ok(self.authority.create_lot(caller, &locator, fee).await?)
    }

    async fn list_for_sale(&self, caller: &A::Identity, index: u32, price: i128) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_listable(&lot, caller)?;
        lifecycle::check_price(price, &self.config)?;
        Ok(self.authority.set_sale(caller, index, price).await?)
    }

    async fn list_for_rent(
        &self,
        caller: &A::Identity,
        index: u32,
        price: i128,
        deposit_percent: u32,
    ) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_listable(&lot, caller)?;
        lifecycle::check_price(price, &self.config)?;
        lifecycle::check_deposit(deposit_percent, &self.config)?;
        Ok(self
            .authority
            .set_rent(caller, index, price, deposit_percent)
            .await?)
    }

    async fn delist(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_listable(&lot, caller)?;
        Ok(self.authority.set_unavailable(caller, index).await?)
    }

    async fn buy(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_buy(&lot, caller)?;
        Ok(self.authority.buy_lot(caller, index, lot.sale_price).await?)
    }

    async fn rent(&self, caller: &A::Identity, index: u32, duration: u64) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_rent(&lot, caller)?;
        lifecycle::check_duration(duration, &self.config)?;
        let cost = self
            .authority
            .rent_quote(index, duration, ListingStatus::ForRent)
            .await?;
        debug!("lot {} costs {} for {}s", index, cost, duration);
        Ok(self.authority.rent_lot(caller, index, duration, cost).await?)
    }

    async fn return_lot(&self, caller: &A::Identity, index: u32, elapsed: u64) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_client_end(&lot, caller)?;
        let due = self
            .authority
            .rent_quote(index, elapsed, ListingStatus::Rented)
            .await?;
        debug!("returning lot {} after {}s owes {}", index, elapsed, due);
        Ok(self.authority.client_end_rent(caller, index, due).await?)
    }

    async fn reclaim(&self, caller: &A::Identity, index: u32) -> Result<()> {
        let _guard = self.locks.acquire(index).await;
        let lot = self.authority.lot(index).await?;
        lifecycle::check_lender_end(&lot, caller, self.clock.now())?;
        Ok(self.authority.lender_end_rent(caller, index).await?)
    }

    /// Reload after a transition, whatever its outcome, then publish a notice.
    async fn finish<T>(&self, action: Action, index: Option<u32>, outcome: Result<T>) -> Result<T> {
        if let Err(err) = self.reload().await {
            warn!("reload after {} failed: {}", action, err);
        }
        self.publish(action, index, &outcome);
        outcome
    }

    fn publish<T>(&self, action: Action, index: Option<u32>, outcome: &Result<T>) {
        let notice = match outcome {
            Ok(_) => {
                info!("{} succeeded (lot {:?})", action, index);
                Notice::Succeeded { action, index }
            }
            Err(err) => {
                warn!("{} failed (lot {:?}): {}", action, index, err);
                Notice::Failed {
                    action,
                    index,
                    reason: err.to_string(),
                }
            }
        };
        // No subscribers is fine.
        let _ = self.notices.send(notice);
    }
}
