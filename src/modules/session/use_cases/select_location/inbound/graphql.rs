use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::service_areas::use_cases::resolve_service_area::inbound::graphql::GqlServiceLocation;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SelectLocationMutation;

#[Object]
impl SelectLocationMutation {
    async fn select_location(
        &self,
        context: &Context<'_>,
        location_id: String,
    ) -> GqlResult<GqlServiceLocation> {
        let state = context.data_unchecked::<AppState>();
        let location = state
            .select_location
            .handle(&location_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(location.into())
    }
}
