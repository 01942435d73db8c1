use crate::layout::*;
use crate::utils::*;
use connect_four_core as game;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub(crate) enum Msg {
    DropPiece(usize),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::BoardConfig,
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    engine: game::GameEngine,
}

fn create_engine(config: game::BoardConfig, seed: u64) -> game::GameEngine {
    log::info!("new {}x{} game, seed {}", config.rows(), config.cols(), seed);
    game::GameEngine::new(config, seed)
}

/// Column under the pointer, measured from the left edge of the element the handler sits on.
fn column_under_pointer(e: &MouseEvent) -> Option<usize> {
    let board = e.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = board.get_bounding_client_rect();
    column_at(f64::from(e.client_x()) - rect.left(), CELL_SIZE)
}

impl GameView {
    fn drop_piece(&mut self, column: usize) -> bool {
        match self.engine.drop_piece(column) {
            Ok(outcome) => {
                log::debug!("drop into column {}: {:?}", column, outcome);
                true
            }
            Err(err) => {
                log::debug!("ignored drop into column {}: {}", column, err);
                false
            }
        }
    }

    fn cell_classes(&self, coords: game::Coord2) -> Classes {
        let cell = self.engine.cell_at(coords).unwrap_or_default();
        classes!(
            "cell",
            piece_class(cell),
            self.engine.is_winning_cell(coords).then_some("winning"),
            (self.engine.last_move() == Some(coords)).then_some("last"),
        )
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        Self {
            engine: create_engine(config, seed.unwrap_or_else(js_random_seed)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DropPiece(column) => self.drop_piece(column),
            Msg::NewGame => {
                self.engine = create_engine(ctx.props().config, js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.engine.size();
        let banner = Banner::of(&self.engine);
        let board_class = classes!("board", self.engine.is_finished().then_some("finished"));
        let style = format!("width: {}px", f64::from(cols) * CELL_SIZE);
        let onclick = ctx
            .link()
            .batch_callback(|e: MouseEvent| column_under_pointer(&e).map(Msg::DropPiece));
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class={"connect-four"}>
                <header class={classes!("banner", banner.class())}>{banner.text()}</header>
                <div class={board_class} {style} {onclick}>
                    {
                        for (0..rows).map(|row| html! {
                            <div class={"row"}>
                                {
                                    for (0..cols).map(|col| html! {
                                        <div class={self.cell_classes((row, col))}/>
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <button onclick={cb_new_game}>{"New game"}</button>
            </div>
        }
    }
}
