//! Choosing the cheapest dungeon order.

use std::sync::atomic::{AtomicBool, Ordering};

use trek_core::Dungeon;

use crate::compose::Composer;
use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::quest::QuestPlan;
use crate::route::Route;

/// Every visiting order, in lexicographic order.
pub const ORDERS: [[Dungeon; 3]; 6] = {
    use Dungeon::{One, Three, Two};
    [
        [One, Two, Three],
        [One, Three, Two],
        [Two, One, Three],
        [Two, Three, One],
        [Three, One, Two],
        [Three, Two, One],
    ]
};

/// Find the cheapest route over all visiting orders.
///
/// Orders with an unreachable leg are skipped. Among orders of equal cost
/// the first in [`ORDERS`] wins.
pub fn plan_route(plan: &QuestPlan, config: &RouteConfig) -> Result<Route, RouteError> {
    plan_route_with_cancel(plan, config, &AtomicBool::new(false))
}

/// [`plan_route`] with cooperative cancellation: `cancel` is checked before
/// each order is composed, never in the middle of one.
pub fn plan_route_with_cancel(
    plan: &QuestPlan,
    config: &RouteConfig,
    cancel: &AtomicBool,
) -> Result<Route, RouteError> {
    let mut composer = Composer::new(plan);
    select_best(|order| composer.compose(plan, config, order), cancel)
}

/// Evaluate every order in [`ORDERS`] and keep the cheapest success.
///
/// [`RouteError::Unreachable`] drops the order; any other error aborts.
fn select_best<F>(mut evaluate: F, cancel: &AtomicBool) -> Result<Route, RouteError>
where
    F: FnMut([Dungeon; 3]) -> Result<Route, RouteError>,
{
    let mut best: Option<Route> = None;

    for order in ORDERS {
        if cancel.load(Ordering::Relaxed) {
            log::debug!("route planning cancelled before order {order:?}");
            return Err(RouteError::Cancelled);
        }
        match evaluate(order) {
            Ok(route) => {
                log::debug!("order {order:?}: cost {}", route.total_cost);
                if best.as_ref().is_none_or(|b| route.total_cost < b.total_cost) {
                    best = Some(route);
                }
            }
            Err(RouteError::Unreachable(leg)) => {
                log::debug!("order {order:?} skipped: no path for {leg}");
            }
            Err(err) => return Err(err),
        }
    }

    match best {
        Some(route) => {
            log::info!(
                "best order {:?} with total cost {}",
                route.order,
                route.total_cost
            );
            Ok(route)
        }
        None => Err(RouteError::NoValidRoute {
            orders: ORDERS.len(),
        }),
    }
}
