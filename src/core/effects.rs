use crate::app::App;
use crate::app::AppSnapshot;
use crate::gateway::actor::GatewayCommand;
use crate::messages::app::AppEvent;
use tokio::sync::mpsc;

#[derive(Default)]
pub struct CoreEffects {
    pub(super) actions: Vec<CoreEffect>,
}

#[derive(Debug)]
pub enum CoreEffect {
    EmitState(Box<AppSnapshot>),
    SendGateway {
        cmd: GatewayCommand,
        warn: Option<&'static str>,
    },
}

impl CoreEffects {
    pub fn emit_state(&mut self, app: &App) {
        self.actions
            .push(CoreEffect::EmitState(Box::new(AppSnapshot::from_app(app))));
    }

    pub fn send_gateway_warn(&mut self, cmd: GatewayCommand, warn: &'static str) {
        self.actions.push(CoreEffect::SendGateway {
            cmd,
            warn: Some(warn),
        });
    }

    pub fn actions(&self) -> &[CoreEffect] {
        &self.actions
    }
}

pub struct CoreDispatch<'a> {
    pub(super) tx_gateway: &'a mpsc::Sender<GatewayCommand>,
    pub(super) tx_evt: &'a mpsc::Sender<AppEvent>,
}

pub async fn run_effects(effects: CoreEffects, dispatch: &CoreDispatch<'_>) {
    for effect in effects.actions {
        match effect {
            CoreEffect::EmitState(app) => {
                let _ = dispatch.tx_evt.send(AppEvent::State(app)).await;
            }
            CoreEffect::SendGateway { cmd, warn } => {
                if let Err(e) = dispatch.tx_gateway.send(cmd).await
                    && let Some(ctx) = warn
                {
                    tracing::warn!(err = %e, "{ctx}");
                }
            }
        }
    }
}
