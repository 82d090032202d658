use async_graphql::{Context, Object};

use crate::shared::infrastructure::session_store::SessionKey;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PrecheckQuery;

#[Object]
impl PrecheckQuery {
    /// Cheap guess whether the postcode is near a served area. Not a booking decision.
    async fn postcode_area_precheck(
        &self,
        context: &Context<'_>,
        postcode: String,
        location_id: Option<String>,
    ) -> bool {
        let state = context.data_unchecked::<AppState>();
        let location_id = match location_id {
            Some(id) => Some(id),
            None => state
                .session
                .get(SessionKey::SelectedLocationId)
                .await
                .ok()
                .flatten(),
        };
        state
            .precheck
            .handle(&postcode, location_id.as_deref())
            .await
    }
}
