//! Live controls for a realtime run, typed one per line on stdin.
//!
//! | Line                  | Effect                                      |
//! |-----------------------|---------------------------------------------|
//! | `p`                   | start or pause                              |
//! | `r`                   | reset; the run stays paused until `p`       |
//! | `speed fast`          | tick speed (slow, normal, fast or ms)       |
//! | `rate 50`             | barber arrival rate in percent              |
//! | `chairs 4`            | barber waiting chairs, paused only          |
//! | `add`                 | one barber customer by hand, paused only    |
//! | `place tobacco+paper` | smokers agent placement, paused only        |
//! | `scheme dark`         | the OS colour scheme changed                |
//! | `q`                   | stop the run                                |

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use sync_barber::BarberShop;
use sync_core::{Simulation, Speed};
use sync_sim::Sim;
use sync_smokers::{Ingredient, SmokersRoom};
use sync_theme::{ColorScheme, ThemeController, ThemeStore};
use tracing::info;

use crate::render::{Frame, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Toggle,
    Reset,
    Speed(Speed),
    Rate(u8),
    Chairs(u8),
    Add,
    Place([Ingredient; 2]),
    Scheme(ColorScheme),
    Quit,
}

impl Control {
    fn name(&self) -> &'static str {
        match self {
            Control::Toggle    => "p",
            Control::Reset     => "r",
            Control::Speed(_)  => "speed",
            Control::Rate(_)   => "rate",
            Control::Chairs(_) => "chairs",
            Control::Add       => "add",
            Control::Place(_)  => "place",
            Control::Scheme(_) => "scheme",
            Control::Quit      => "q",
        }
    }
}

impl FromStr for Control {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Control> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            bail!("unexpected `{extra}` after `{verb}`");
        }
        let needs = |what: &str| arg.ok_or_else(|| anyhow!("`{verb}` needs {what}"));

        Ok(match verb.as_str() {
            "p" | "pause" | "start" => Control::Toggle,
            "r" | "reset"           => Control::Reset,
            "q" | "quit"            => Control::Quit,
            "add"                   => Control::Add,
            "speed"  => Control::Speed(needs("a speed")?.parse()?),
            "rate"   => Control::Rate(needs("a percentage")?.parse().context("rate must be a number")?),
            "chairs" => Control::Chairs(needs("a count")?.parse().context("chairs must be a number")?),
            "place"  => Control::Place(Ingredient::parse_pair(needs("a pair like tobacco+paper")?)?),
            "scheme" => Control::Scheme(needs("light or dark")?.parse()?),
            ""       => bail!("empty command"),
            other    => bail!("unknown command `{other}`"),
        })
    }
}

/// Controls that only one simulator understands.
pub trait Controls: Simulation + Frame + Sized {
    /// Apply `control` and describe what happened.
    fn apply(sim: &mut Sim<Self>, control: Control) -> Result<String>;
}

impl Controls for BarberShop {
    fn apply(sim: &mut Sim<Self>, control: Control) -> Result<String> {
        match control {
            Control::Rate(rate) => {
                sim.model_mut().set_arrival_rate(rate)?;
                Ok(format!("arrival rate {rate}%"))
            }
            Control::Chairs(chairs) => {
                sim.with_paused(|shop, _| shop.set_chairs(chairs))??;
                Ok(format!("{chairs} waiting chairs"))
            }
            Control::Add => Ok(sim.with_paused(|shop, clock| shop.admit(clock))?.to_string()),
            other => bail!("`{}` does nothing in the {} simulator", other.name(), Self::NAME),
        }
    }
}

impl Controls for SmokersRoom {
    fn apply(sim: &mut Sim<Self>, control: Control) -> Result<String> {
        match control {
            Control::Place(pair) => Ok(sim.with_paused(|room, clock| room.place(pair, clock))??.to_string()),
            other => bail!("`{}` does nothing in the {} simulator", other.name(), Self::NAME),
        }
    }
}

/// What the run loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this and redraw.
    Reply(String),
    Quit,
}

/// Theme state and palette for an interactive run.
pub struct Console<T: ThemeStore> {
    themes:  Option<ThemeController<T>>,
    palette: Palette,
}

impl<T: ThemeStore> Console<T> {
    /// Without a controller the light palette is used and scheme changes are
    /// ignored.
    pub fn new(themes: Option<ThemeController<T>>) -> Self {
        let scheme = themes.as_ref().map(ThemeController::effective).unwrap_or_default();
        Self { themes, palette: Palette::for_scheme(scheme) }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn themes(&self) -> Option<&ThemeController<T>> {
        self.themes.as_ref()
    }

    /// Parse one line and carry it out against `sim`.
    pub fn dispatch<S: Controls>(&mut self, sim: &mut Sim<S>, line: &str) -> Result<Flow> {
        let control: Control = line.parse()?;
        let reply = match control {
            Control::Toggle => {
                let state = if sim.toggle() { "running" } else { "paused" };
                state.to_owned()
            }
            Control::Reset => {
                sim.reset();
                "reset; press p to start".to_owned()
            }
            Control::Speed(speed) => {
                sim.set_speed(speed);
                format!("speed {speed} ({} ms)", speed.millis())
            }
            Control::Scheme(scheme) => self.system_changed(scheme),
            Control::Quit => return Ok(Flow::Quit),
            other => S::apply(sim, other)?,
        };
        info!(sim = S::NAME, command = line.trim(), %reply, "console command");
        Ok(Flow::Reply(reply))
    }

    fn system_changed(&mut self, scheme: ColorScheme) -> String {
        let Some(themes) = self.themes.as_mut() else {
            return "no theme store; keeping light".to_owned();
        };
        match themes.system_changed(scheme) {
            Some(now) => {
                self.palette = Palette::for_scheme(now);
                format!("drawing {now}")
            }
            None => format!("theme {} still draws {}", themes.theme(), themes.effective()),
        }
    }
}
