use crate::cell::CellView;
use crate::utils::*;
use clap::Args;
use lights_out_core as game;
use game::{BoardConfig, Coord, Coord2, GameError, GameSession};
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows on the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_ROWS)]
    #[prop_or(BoardConfig::DEFAULT_ROWS)]
    pub rows: Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_COLS)]
    #[prop_or(BoardConfig::DEFAULT_COLS)]
    pub cols: Coord,

    /// Chance that any light starts on, between 0 and 1
    #[arg(long = "chance", default_value_t = BoardConfig::DEFAULT_CHANCE)]
    #[prop_or(BoardConfig::DEFAULT_CHANCE)]
    pub chance_light_starts_on: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

impl BoardProps {
    fn config(&self) -> game::Result<BoardConfig> {
        BoardConfig::new(self.rows, self.cols, self.chance_light_starts_on)
    }
}

fn cell_key((row, col): Coord2) -> String {
    format!("{}-{}", row, col)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Flip(Coord2),
    BoardChanged,
}

/// Re-renders when the session announces a committed move, not on the flip message itself.
#[derive(Debug)]
pub(crate) struct BoardView {
    game: Result<GameSession, GameError>,
}

impl BoardView {
    fn start_game(props: &BoardProps, on_change: Callback<()>) -> Result<GameSession, GameError> {
        let config = props.config()?;
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let mut session = GameSession::from_config(config, seed);
        session.subscribe(move |board| {
            log::debug!("lights still on: {}", board.lit_count());
            on_change.emit(());
        });
        Ok(session)
    }

    fn flip(&mut self, coords: Coord2) -> bool {
        let Ok(game) = &mut self.game else {
            return false;
        };

        match game.flip(coords) {
            Ok(outcome) => {
                if outcome.is_won() {
                    log::info!("won after {} moves", game.move_count());
                }
                true
            }
            Err(err) => {
                log::warn!("ignored flip at {:?}: {}", coords, err);
                false
            }
        }
    }

    fn view_board(ctx: &Context<Self>, game: &GameSession) -> Html {
        let board = game.board();
        let (rows, cols) = board.size();

        html! {
            <table class="Board">
                <tbody>
                    {
                        for (0..rows).map(|y| html! {
                            <tr key={y.to_string()}>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (y, x);
                                        let is_lit = board[pos];
                                        let flip_cells_around_me = ctx.link().callback(move |()| Msg::Flip(pos));
                                        html! {
                                            <CellView key={cell_key(pos)} {is_lit} {flip_cells_around_me}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let on_change = ctx.link().callback(|()| Msg::BoardChanged);
        let game = Self::start_game(ctx.props(), on_change);
        if let Err(err) = &game {
            log::error!("rejected board config {:?}: {}", ctx.props(), err);
        }
        Self { game }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Flip(coords) => {
                log::debug!("flip cells around: {:?}", coords);
                self.flip(coords);
                false
            }
            BoardChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.game {
            Err(err) => html! {
                <div class="Board-error">{format!("Cannot start game: {}", err)}</div>
            },
            Ok(game) if game.is_finished() => html! {
                <div class="Board-win">{"You won!"}</div>
            },
            Ok(game) => Self::view_board(ctx, game),
        }
    }
}
