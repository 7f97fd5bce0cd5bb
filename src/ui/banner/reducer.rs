use crate::ui::banner::intent::BannerIntent;
use crate::ui::banner::state::BannerState;
use crate::ui::mvi::Reducer;

pub struct BannerReducer;

impl Reducer for BannerReducer {
    type State = BannerState;
    type Intent = BannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BannerIntent::Show {
                message,
                expires_at,
            } => BannerState::Shown {
                message,
                expires_at,
            },
            BannerIntent::Tick { now } => match state {
                BannerState::Shown { expires_at, .. } if now >= expires_at => BannerState::Hidden,
                other => other,
            },
            BannerIntent::Clear => BannerState::Hidden,
        }
    }
}
