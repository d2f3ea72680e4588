use iced::time::{self, Instant};
use iced::widget::{canvas, container, row, stack, Space};
use iced::{Element, Length, Subscription, Task, Theme};
use rand::thread_rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod anim;
mod media;
mod palette;
mod state;
mod ui;

use media::fetch::FetchError;
use state::carousel::Carousel;
use state::proposal::Proposal;
use state::stage::Stage;
use ui::background::Backdrop;
use ui::confetti::Confetti;

/// Main application state
struct MilesApart {
    /// Which screen is showing
    stage: Stage,
    /// When the current screen appeared, for the staged reveals
    stage_entered: Instant,
    /// Latest tick of the animation clock
    now: Instant,
    backdrop: Backdrop,
    carousel: Carousel,
    proposal: Proposal,
    confetti: Confetti,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Animation clock, shared by every moving part
    Tick(Instant),
    /// Move to the next screen
    Advance,
    /// A background photo fetch finished
    PhotoFetched(usize, Result<iced::widget::image::Handle, FetchError>),
    NextPhoto,
    PreviousPhoto,
    JumpToPhoto(usize),
    /// The pointer caught up with the "No" button
    DodgeNo,
    /// "YES!" was pressed
    Accept,
}

impl MilesApart {
    /// Create the application and kick off one fetch per photo
    fn new() -> (Self, Task<Message>) {
        let now = Instant::now();
        let memories = state::data::memories();

        info!("💌 Miles Apart ready with {} memories", memories.len());

        let client = media::fetch::client();
        let fetches: Vec<Task<Message>> = memories
            .iter()
            .enumerate()
            .map(|(index, memory)| {
                let url = media::link::resolve_photo_url(&memory.url);
                Task::perform(
                    media::fetch::fetch_photo(client.clone(), url),
                    move |result| Message::PhotoFetched(index, result),
                )
            })
            .collect();

        (
            MilesApart {
                stage: Stage::Intro,
                stage_entered: now,
                now,
                backdrop: Backdrop::new(now, &mut thread_rng()),
                carousel: Carousel::new(memories),
                proposal: Proposal::default(),
                confetti: Confetti::new(),
            },
            Task::batch(fetches),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.backdrop.now = now;
                self.confetti.tick(now, &mut thread_rng());
            }
            Message::Advance => {
                if let Some(next) = self.stage.next() {
                    self.stage = next;
                    self.stage_entered = Instant::now();
                }
            }
            Message::PhotoFetched(index, result) => {
                if let Err(error) = &result {
                    warn!("💔 Photo {index} failed to load: {error}");
                }
                self.carousel.resolve(index, result);
            }
            Message::NextPhoto => self.carousel.next(Instant::now()),
            Message::PreviousPhoto => self.carousel.previous(Instant::now()),
            Message::JumpToPhoto(index) => self.carousel.jump(index, Instant::now()),
            Message::DodgeNo => self.proposal.dodge(&mut thread_rng()),
            Message::Accept => {
                // Only the proposal screen accepts; a repeat press is a no-op
                if self.stage == Stage::Proposal {
                    if let Some(next) = self.stage.next() {
                        let now = Instant::now();
                        self.confetti.launch(now, &mut thread_rng());
                        self.stage = next;
                        self.stage_entered = now;
                        info!("🎉 Accepted, after {} dodges", self.proposal.dodges());
                    }
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let elapsed = self.now.duration_since(self.stage_entered).as_secs_f32();

        let screen: Element<Message> = match self.stage {
            Stage::Intro => ui::intro::view(elapsed),
            Stage::Distance => ui::distance::view(elapsed),
            Stage::Memories => ui::carousel::view(&self.carousel, self.now),
            Stage::Proposal => ui::proposal::view(&self.proposal, elapsed),
            Stage::Accepted => ui::accepted::view(elapsed),
        };

        let mut layers = stack![
            canvas(&self.backdrop)
                .width(Length::Fill)
                .height(Length::Fill),
            screen,
        ];

        if !self.stage.is_final() {
            layers = layers.push(self.progress_pips());
        }

        if self.confetti.is_active() {
            layers = layers.push(
                canvas(&self.confetti)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        layers.into()
    }

    /// Bottom-center pips tracking how deep into the sequence we are
    fn progress_pips(&self) -> Element<Message> {
        let reached = self.stage.index();

        let pips = (0..Stage::COUNT - 1).fold(row![].spacing(8), |pips, i| {
            let (width, color) = if reached >= i {
                (26.0, palette::ROSE_400)
            } else {
                (8.0, palette::with_alpha(iced::Color::WHITE, 0.2))
            };

            pips.push(
                container(Space::new(Length::Fixed(width), Length::Fixed(4.0))).style(
                    move |_| container::Style {
                        background: Some(color.into()),
                        border: iced::Border {
                            radius: 999.0.into(),
                            ..iced::Border::default()
                        },
                        ..container::Style::default()
                    },
                ),
            )
        });

        container(pips)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(24)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        palette::valentine()
    }

    /// One clock drives every animation on screen
    fn subscription(&self) -> Subscription<Message> {
        time::every(time::Duration::from_millis(16)).map(Message::Tick)
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("miles_apart=info")),
        )
        .init();

    iced::application("Miles Apart", MilesApart::update, MilesApart::view)
        .subscription(MilesApart::subscription)
        .theme(MilesApart::theme)
        .window_size((1100.0, 760.0))
        .centered()
        .run_with(MilesApart::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MilesApart {
        let (app, _startup) = MilesApart::new();
        app
    }

    #[test]
    fn test_advance_stops_at_the_terminal_stage() {
        let mut app = app();

        for _ in 0..10 {
            let _ = app.update(Message::Advance);
        }

        assert_eq!(app.stage, Stage::Accepted);
    }

    #[test]
    fn test_accept_transitions_exactly_once() {
        let mut app = app();

        // Walk to the proposal screen
        for _ in 0..3 {
            let _ = app.update(Message::Advance);
        }
        assert_eq!(app.stage, Stage::Proposal);

        // However often the button fled first...
        for _ in 0..7 {
            let _ = app.update(Message::DodgeNo);
        }

        // ...one yes is all it takes
        let _ = app.update(Message::Accept);
        assert_eq!(app.stage, Stage::Accepted);
        assert!(app.confetti.is_active());

        // A repeat press changes nothing
        let _ = app.update(Message::Accept);
        assert_eq!(app.stage, Stage::Accepted);
    }

    #[test]
    fn test_accept_only_works_on_the_proposal_screen() {
        let mut app = app();

        let _ = app.update(Message::Accept);
        assert_eq!(app.stage, Stage::Intro);
        assert!(!app.confetti.is_active());
    }
}
