use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::availability::use_cases::generate_time_slots::inbound::graphql::TimeSlotsQuery;
use crate::modules::service_areas::use_cases::precheck_postcode_area::inbound::graphql::PrecheckQuery;
use crate::modules::service_areas::use_cases::resolve_service_area::inbound::graphql::ServiceAreaQuery;
use crate::modules::session::use_cases::select_location::inbound::graphql::SelectLocationMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeSlotsQuery, ServiceAreaQuery, PrecheckQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SelectLocationMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
