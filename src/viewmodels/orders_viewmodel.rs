use crate::errors::ApiError;
use crate::models::OrderTally;
use crate::services::OrderTallySource;
use crate::stores::LoadState;

pub const ORDERS_FAILED: &str = "Failed to load orders";

/// Label and value of one counter card
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCounter {
    pub label: &'static str,
    pub value: Option<u32>,
}

pub struct OrdersViewModel;

impl OrdersViewModel {
    /// Same fetch-once contract as the drivers widget. `None` when aborted.
    pub async fn load(source: &dyn OrderTallySource) -> Option<LoadState<OrderTally>> {
        match source.fetch_tally().await {
            Ok(tally) => Some(LoadState::Loaded(tally)),
            Err(ApiError::Aborted) => None,
            Err(e) => {
                log::error!("❌ Error fetching order tally: {}", e);
                Some(LoadState::Failed(e.user_message(ORDERS_FAILED)))
            }
        }
    }

    /// Counters in display order; values are absent until loaded
    pub fn counters(state: &LoadState<OrderTally>) -> [OrderCounter; 3] {
        let tally = state.loaded();
        [
            OrderCounter {
                label: "Total Orders",
                value: tally.map(|t| t.total),
            },
            OrderCounter {
                label: "En Route",
                value: tally.map(|t| t.en_route),
            },
            OrderCounter {
                label: "Cancelled Orders",
                value: tally.map(|t| t.cancelled),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PlaceholderTallies;
    use futures::executor::block_on;

    #[test]
    fn placeholder_tallies_fill_all_counters() {
        let state = block_on(OrdersViewModel::load(&PlaceholderTallies::default())).unwrap();
        let counters = OrdersViewModel::counters(&state);
        assert_eq!(counters[0].label, "Total Orders");
        assert_eq!(counters[0].value, Some(30));
        assert_eq!(counters[1].value, Some(12));
        assert_eq!(counters[2].value, Some(30));
    }

    #[test]
    fn counters_are_blank_while_loading() {
        let counters = OrdersViewModel::counters(&LoadState::Loading);
        assert!(counters.iter().all(|c| c.value.is_none()));
    }
}
