//! Plain-text frames of the two simulators.

use std::fmt::{Display, Write as _};

use sync_barber::{BarberShop, BarberStatus};
use sync_core::{EventLog, SimClock};
use sync_smokers::{SmokerStatus, SmokersRoom};
use sync_theme::ColorScheme;

/// Log lines shown under each frame.
pub const FRAME_LOG_LINES: usize = 5;

/// ANSI colour set for one colour scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub title: &'static str,
    pub busy:  &'static str,
    pub alert: &'static str,
    pub dim:   &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette { title: "", busy: "", alert: "", dim: "", reset: "" };

    pub fn for_scheme(scheme: ColorScheme) -> Palette {
        match scheme {
            ColorScheme::Light => Palette {
                title: "\x1b[1;34m",
                busy:  "\x1b[32m",
                alert: "\x1b[31m",
                dim:   "\x1b[90m",
                reset: "\x1b[0m",
            },
            ColorScheme::Dark => Palette {
                title: "\x1b[1;96m",
                busy:  "\x1b[92m",
                alert: "\x1b[91m",
                dim:   "\x1b[37m",
                reset: "\x1b[0m",
            },
        }
    }

    fn paint(&self, color: &str, text: impl Display) -> String {
        format!("{color}{text}{}", self.reset)
    }
}

/// Something that can draw itself as a text frame.
pub trait Frame {
    fn frame(&self, clock: &SimClock, palette: &Palette) -> String;
}

fn header(out: &mut String, title: &str, clock: &SimClock, p: &Palette) {
    let _ = writeln!(out, "{} {}", p.paint(p.title, format!("== {title} ==")), p.paint(p.dim, clock.wall_time()));
}

fn recent(out: &mut String, log: &EventLog, p: &Palette) {
    let _ = writeln!(out, "Recent events:");
    if log.is_empty() {
        let _ = writeln!(out, "  {}", p.paint(p.dim, "(none yet)"));
    }
    for entry in log.iter().take(FRAME_LOG_LINES) {
        let _ = writeln!(out, "  {entry}");
    }
}

impl Frame for BarberShop {
    fn frame(&self, clock: &SimClock, p: &Palette) -> String {
        let mut out = String::new();
        header(&mut out, "Sleeping Barber", clock, p);

        let barber = match (self.status(), self.serving()) {
            (BarberStatus::Cutting, Some(c)) => p.paint(p.busy, format!("cutting Customer {}", c.id)),
            (BarberStatus::Sleeping, _)      => p.paint(p.dim, "sleeping"),
            (status, _)                      => status.to_string(),
        };
        let _ = writeln!(out, "Barber : {barber}");

        let chairs = self.config().chairs() as usize;
        let mut seats: Vec<String> = self.waiting().map(|c| format!("[{:>2}]", c.id)).collect();
        seats.resize(chairs.max(seats.len()), "[  ]".to_owned());
        let _ = writeln!(
            out,
            "Chairs : {}  ({}/{} taken)",
            seats.join(" "),
            self.waiting_count(),
            chairs
        );

        let _ = writeln!(
            out,
            "Served {} | Waiting {} | Rejected {} | Arrival rate {}%",
            self.served(),
            self.waiting_count(),
            p.paint(if self.rejected() > 0 { p.alert } else { p.reset }, self.rejected()),
            self.config().arrival_rate()
        );
        recent(&mut out, self.log(), p);
        out
    }
}

impl Frame for SmokersRoom {
    fn frame(&self, clock: &SimClock, p: &Palette) -> String {
        let mut out = String::new();
        header(&mut out, "Cigarette Smokers", clock, p);

        let _ = writeln!(out, "Agent  : {}", self.agent());
        let _ = writeln!(out, "Table  : {}", self.table());
        for smoker in self.smokers() {
            let [a, b] = smoker.needs();
            let status = match smoker.status {
                SmokerStatus::Smoking => p.paint(p.busy, smoker.status.as_str()),
                other                 => other.as_str().to_owned(),
            };
            let _ = writeln!(
                out,
                "Smoker {} has {:<7} needs {} + {:<8} {:<8} smokes {}",
                smoker.id,
                smoker.has.as_str(),
                a,
                b.as_str(),
                status,
                smoker.smokes
            );
        }
        let _ = writeln!(out, "Total smokes {}", self.total_smokes());
        recent(&mut out, self.log(), p);
        out
    }
}
