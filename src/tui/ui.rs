//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::App;
use super::components::scanner_modal;
use super::screens::{confirmation, exchange, login};
use crate::models::Screen;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Login => login::render(frame, app),
        Screen::Exchange => {
            exchange::render(frame, app);
            if let Some(token) = app.exchange.scanner {
                scanner_modal::render(frame, token, app.ticks);
            }
        }
        Screen::Confirmation => confirmation::render(frame, app),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::EventConfig;
    use crate::models::User;
    use crate::session::{Completion, Outcome, Settlement};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn signed_in() -> App {
        sign_in(App::default())
    }

    fn sign_in(mut app: App) -> App {
        let job = app.controller.login("a@b.com").unwrap();
        app.controller.complete(Completion {
            epoch: job.epoch,
            outcome: Outcome::Authenticated(User::guest("a@b.com")),
        });
        app.sync_screen();
        app
    }

    fn exchanged() -> App {
        exchange(signed_in())
    }

    fn exchange(mut app: App) -> App {
        let job = app.controller.exchange().unwrap();
        app.controller.complete(Completion {
            epoch: job.epoch,
            outcome: Outcome::Settled(Settlement {
                units_per_token: 1,
                reward: 60,
            }),
        });
        app.sync_screen();
        app
    }

    #[test]
    fn login_screen_shows_title_and_form() {
        let screen = draw(&App::default());
        assert!(screen.contains("GLOBAL PIZZA PARTY 2026"));
        assert!(screen.contains("tu@email.com"));
        assert!(screen.contains("INGRESAR"));
    }

    #[test]
    fn login_screen_shows_progress_while_signing_in() {
        let mut app = App::default();
        app.controller.login("a@b.com").unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Enviando..."));
        assert!(!screen.contains("INGRESAR"));
    }

    #[test]
    fn wallet_shows_checklist_before_exchange() {
        let screen = draw(&signed_in());
        assert!(screen.contains("Vegeta"));
        assert!(screen.contains("0 Beny Pts"));
        assert!(screen.contains("Verifica tu ticket reclamado"));
        assert!(screen.contains("CANJEAR TOKENS"));
        assert!(screen.contains("$SLICE"));
        assert!(screen.contains("$DRINK"));
        assert!(!screen.contains("Descubre Más"));
    }

    #[test]
    fn confirmation_lists_new_balances() {
        let screen = draw(&exchanged());
        assert!(screen.contains("¡Canje Exitoso!"));
        assert!(screen.contains("Token de Slice"));
        assert!(screen.contains("Token de Bebida"));
        assert!(screen.contains("VOLVER A TU WALLET"));
    }

    #[test]
    fn wallet_after_exchange_shows_ads_and_scanner() {
        let mut app = exchanged();
        app.controller.reset_to_exchange();
        app.sync_screen();

        let screen = draw(&app);
        assert!(screen.contains("Descubre Más"));
        assert!(screen.contains("Conoce Soroswap"));
        assert!(screen.contains("60 Beny Pts"));
        assert!(!screen.contains("CANJEAR TOKENS"));

        app.open_scanner(0);
        let screen = draw(&app);
        assert!(screen.contains("Canjear Token de Slice"));
        assert!(screen.contains("rebanada de pizza"));
        assert!(screen.contains("Cerrar"));
    }

    #[test]
    fn wallet_survives_an_oversized_ad_list() {
        let ads = (0..70_000).map(|i| format!("Anuncio {i}")).collect();
        let event = EventConfig {
            ads,
            ..EventConfig::default()
        };
        let mut app = exchange(sign_in(App::new(event)));
        app.controller.reset_to_exchange();
        app.sync_screen();

        let screen = draw(&app);
        assert!(screen.contains("Descubre Más"));
        assert!(screen.contains("Anuncio 0"));
    }
}
