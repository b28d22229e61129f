//! Board pin map (Raspberry Pi Pico)
//!
//! | Lines            | GPIO    | Mode                 |
//! |------------------|---------|----------------------|
//! | Column select 0-7| 0-7     | push-pull, active high |
//! | LED rows 0-10    | 8-18    | push-pull, active high |
//! | Button rows 0-1  | 19-20   | input, pull-down     |
//! | Dial A / B       | 21 / 22 | input, pull-up       |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use tessera_core::traits::MatrixLines;
use tessera_hal::Eh;

type Out = Eh<Output<'static>>;
type In = Eh<Input<'static>>;

/// Panel lines on this board
pub type BoardLines = MatrixLines<Out, Out, In, In>;

/// Pins left over after the panel takes its own
pub struct Spare {
    pub led: Output<'static>,
}

/// Claim the panel pins
pub fn init(p: Peripherals) -> (BoardLines, Spare) {
    let columns = [
        Eh::new(Output::new(p.PIN_0, Level::Low)),
        Eh::new(Output::new(p.PIN_1, Level::Low)),
        Eh::new(Output::new(p.PIN_2, Level::Low)),
        Eh::new(Output::new(p.PIN_3, Level::Low)),
        Eh::new(Output::new(p.PIN_4, Level::Low)),
        Eh::new(Output::new(p.PIN_5, Level::Low)),
        Eh::new(Output::new(p.PIN_6, Level::Low)),
        Eh::new(Output::new(p.PIN_7, Level::Low)),
    ];

    let rows = [
        Eh::new(Output::new(p.PIN_8, Level::Low)),
        Eh::new(Output::new(p.PIN_9, Level::Low)),
        Eh::new(Output::new(p.PIN_10, Level::Low)),
        Eh::new(Output::new(p.PIN_11, Level::Low)),
        Eh::new(Output::new(p.PIN_12, Level::Low)),
        Eh::new(Output::new(p.PIN_13, Level::Low)),
        Eh::new(Output::new(p.PIN_14, Level::Low)),
        Eh::new(Output::new(p.PIN_15, Level::Low)),
        Eh::new(Output::new(p.PIN_16, Level::Low)),
        Eh::new(Output::new(p.PIN_17, Level::Low)),
        Eh::new(Output::new(p.PIN_18, Level::Low)),
    ];

    let buttons = [
        Eh::new(Input::new(p.PIN_19, Pull::Down)),
        Eh::new(Input::new(p.PIN_20, Pull::Down)),
    ];

    let dial_a = Eh::new(Input::new(p.PIN_21, Pull::Up));
    let dial_b = Eh::new(Input::new(p.PIN_22, Pull::Up));

    let spare = Spare {
        led: Output::new(p.PIN_25, Level::Low),
    };

    (MatrixLines::new(columns, rows, buttons, dial_a, dial_b), spare)
}
