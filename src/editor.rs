use crate::command::{Action, Dispatch, HistoryPolicy, Store};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::event::StateListener;
use crate::input::{CanvasTransform, GestureSession, PointerEvent};
use crate::picture::{GridPos, Picture};
use crate::state::AppState;
use crate::tools::ToolRegistry;
use crate::util::time::{Clock, SystemClock};

/// The editor core: application state, tools and the running gesture.
///
/// UI code forwards pointer input and discrete actions here and redisplays
/// from [`PixelEditor::state`] or through a subscribed [`StateListener`].
#[derive(Debug)]
pub struct PixelEditor {
    store: Store,
    tools: ToolRegistry,
    session: GestureSession,
}

impl PixelEditor {
    pub fn new(
        state: AppState,
        tools: ToolRegistry,
        policy: HistoryPolicy,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store: Store::new(state, policy, clock),
            tools,
            session: GestureSession::new(),
        }
    }

    /// An editor with the base tools, set up from `config`.
    ///
    /// Fails with `UnknownTool` if the configured tool is not one of them.
    pub fn with_config(config: &EditorConfig) -> Result<Self> {
        let tools = ToolRegistry::base();
        tools.get(&config.tool)?;
        Ok(Self::new(
            config.initial_state()?,
            tools,
            config.history_policy(),
            Box::new(SystemClock),
        ))
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn subscribe(&self, listener: Box<dyn StateListener>) {
        self.store.subscribe(listener);
    }

    /// Fold an action into the state and notify listeners
    pub fn dispatch(&mut self, action: Action) {
        if let Action::Update(update) = &action {
            if let Some(tool) = &update.tool {
                log::info!("Tool changed to {}", tool);
            }
        }
        self.store.dispatch(action);
    }

    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    /// Replace the picture, e.g. after an import.
    ///
    /// Goes through history like any picture edit: it opens a checkpoint when no
    /// window is open and joins the current one otherwise.
    pub fn load_picture(&mut self, picture: Picture) {
        log::info!("Loaded {}x{} picture", picture.width(), picture.height());
        self.dispatch(Action::set_picture(picture));
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_active()
    }

    pub fn pointer_down(&mut self, pos: GridPos) -> Result<()> {
        self.session.begin(pos, &self.tools, &mut self.store)
    }

    pub fn pointer_move(&mut self, pos: GridPos) -> Result<()> {
        self.session.drag(pos, &mut self.store)
    }

    pub fn pointer_up(&mut self) {
        self.session.end();
    }

    /// Feed a screen-space pointer event through the gesture session
    pub fn handle_pointer(&mut self, event: &PointerEvent, transform: &CanvasTransform) -> Result<()> {
        self.session
            .handle_pointer(event, transform, &self.tools, &mut self.store)
    }
}

impl Dispatch for PixelEditor {
    fn dispatch(&mut self, action: Action) {
        PixelEditor::dispatch(self, action);
    }
}
