//! Company detail screen view-model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::company::CompanyInfo;
use crate::intraday::IntradayInfo;
use crate::resource::Resource;
use crate::stocks::StockRepositoryTrait;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoState {
    pub intraday_infos: Vec<IntradayInfo>,
    pub company_info: Option<CompanyInfo>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

pub struct CompanyInfoViewModel {
    repository: Arc<dyn StockRepositoryTrait>,
    state: watch::Sender<CompanyInfoState>,
}

impl CompanyInfoViewModel {
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        let (state, _) = watch::channel(CompanyInfoState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> CompanyInfoState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CompanyInfoState> {
        self.state.subscribe()
    }

    /// Loads the profile and the intraday bars of `symbol` side by side.
    ///
    /// Results are applied once both calls finished, profile first. An error
    /// from either call is kept even when the other one succeeds.
    pub async fn load(&self, symbol: &str) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_message = None;
        });

        let (company_info, intraday_infos) = tokio::join!(
            self.repository.get_company_info(symbol),
            self.repository.get_intraday_infos(symbol)
        );

        self.state.send_modify(|s| {
            match company_info {
                Resource::Success(info) => s.company_info = Some(info),
                Resource::Error(message) => {
                    s.company_info = None;
                    s.error_message = Some(message);
                }
                Resource::Loading(_) => {}
            }
            match intraday_infos {
                Resource::Success(bars) => s.intraday_infos = bars,
                Resource::Error(message) => {
                    s.intraday_infos.clear();
                    s.error_message = Some(message);
                }
                Resource::Loading(_) => {}
            }
            s.is_loading = false;
        });
    }
}
