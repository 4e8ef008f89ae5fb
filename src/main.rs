use donsync::config;
use donsync::core::input::{DrumAction, InputEdge};
use donsync::game::alternate::{InputGate, Verdict};
use donsync::game::chart::{BreakSpan, ChartData};
use donsync::game::gate::GateSchedule;
use donsync::game::note::{AliveNotes, Note, NoteResult, NoteType};
use donsync::game::timing::HitWindows;
use log::{info, warn, LevelFilter};
use std::path::Path;

const FRAME_MS: f32 = 16.0;
const SESSION_END_MS: f32 = 3000.0;
const SUMMARY_PATH: &str = "save/session_tally.json";

fn demo_chart() -> Result<ChartData, String> {
    ChartData::new(
        vec![
            Note::new(1000.0, NoteType::Tap, false),
            Note::new(1200.0, NoteType::Tap, false),
            Note::new(1400.0, NoteType::Tap, false),
            Note::new(1600.0, NoteType::Tap, true),
            Note::new(2600.0, NoteType::Tap, false),
        ],
        vec![BreakSpan {
            start_ms: 1700.0,
            end_ms: 2400.0,
        }],
    )
}

fn main() {
    // --- Logging Setup ---
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("donsync::game", LevelFilter::Debug)
        .init();

    info!("donsync demo session starting...");

    config::load();
    let cfg = config::get();
    let windows = HitWindows::from_config(&cfg);

    let (mut notes, schedule) = match demo_chart() {
        Ok(chart) => {
            let schedule = GateSchedule::from_chart(&chart, &windows);
            (chart.notes, schedule)
        }
        Err(e) => {
            warn!("chart rejected ({}), alternation runs without suspension", e);
            (Vec::new(), GateSchedule::never())
        }
    };

    let mut gate = InputGate::new(schedule);

    // Scripted input: (song time ms, action, pressed). Mashing in the
    // lead-in, a repeated left in the enforced run, an accent, a press in
    // the break, and a fresh start after it.
    let script: [(f32, DrumAction, bool); 16] = [
        (300.0, DrumAction::LeftCentre, true),
        (350.0, DrumAction::LeftCentre, false),
        (400.0, DrumAction::LeftCentre, true),
        (450.0, DrumAction::LeftCentre, false),
        (995.0, DrumAction::LeftCentre, true),
        (1010.0, DrumAction::LeftCentre, false),
        (1190.0, DrumAction::LeftCentre, true),
        (1210.0, DrumAction::LeftCentre, false),
        (1215.0, DrumAction::RightCentre, true),
        (1230.0, DrumAction::RightCentre, false),
        (1605.0, DrumAction::RightCentre, true),
        (1620.0, DrumAction::RightCentre, false),
        (2000.0, DrumAction::LeftCentre, true),
        (2010.0, DrumAction::LeftCentre, false),
        (2470.0, DrumAction::LeftCentre, true),
        (2480.0, DrumAction::LeftCentre, false),
    ];
    let mut next_edge = 0;

    let mut now_ms = 0.0;
    while now_ms <= SESSION_END_MS {
        let clock_ms = now_ms + cfg.global_offset_ms;
        gate.on_frame(clock_ms);

        // Time out notes nobody hit, standing in for the judge.
        for note in notes.iter_mut().filter(|n| !n.is_judged()) {
            if clock_ms > note.time_ms + windows.widest() {
                note.result = Some(NoteResult::Miss);
            }
        }

        while next_edge < script.len() && script[next_edge].0 <= clock_ms {
            let (edge_ms, action, pressed) = script[next_edge];
            next_edge += 1;

            let edge = InputEdge { action, pressed };
            let verdict = {
                let alive = AliveNotes::new(&notes);
                gate.on_edge(edge, edge_ms, &alive)
            };
            info!(
                "{:>6.0}ms {:?} {} -> {:?}",
                edge_ms,
                action,
                if pressed { "press" } else { "release" },
                verdict
            );

            // A passed press reaches the judge.
            if pressed && verdict == Verdict::Pass {
                if let Some(note) = notes.iter_mut().find(|n| !n.is_judged()) {
                    if let Some(grade) = windows.grade_for(edge_ms - note.time_ms) {
                        info!("        judged {:.0}ms note as {:?}", note.time_ms, grade);
                        note.result = Some(grade);
                    }
                }
            }
        }

        now_ms += FRAME_MS;
    }

    let tally = gate.tally();
    info!(
        "session over: {} presses ({} passed, {} blocked), {} releases forwarded",
        tally.presses, tally.passed, tally.blocked, tally.releases_forwarded
    );
    if let Err(e) = tally.write_summary(Path::new(SUMMARY_PATH)) {
        warn!("could not write session summary: {}", e);
    } else {
        info!("session summary written to {}", SUMMARY_PATH);
    }
}
