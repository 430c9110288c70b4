//! Guided self-care activities. All data here is static; the timers only
//! answer "where am I after N seconds" so clients can resume a session.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
    Pause,
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct BreathingStep {
    pub phase: BreathingPhase,
    pub seconds: u64,
    pub instruction: &'static str,
}

/// 4-7-8 breathing: inhale 4, hold 7, exhale 8, pause 1.
pub const BREATHING_PATTERN: [BreathingStep; 4] = [
    BreathingStep {
        phase: BreathingPhase::Inhale,
        seconds: 4,
        instruction: "Breathe in slowly through your nose",
    },
    BreathingStep {
        phase: BreathingPhase::Hold,
        seconds: 7,
        instruction: "Hold your breath gently",
    },
    BreathingStep {
        phase: BreathingPhase::Exhale,
        seconds: 8,
        instruction: "Exhale slowly through your mouth",
    },
    BreathingStep {
        phase: BreathingPhase::Pause,
        seconds: 1,
        instruction: "Brief pause before next cycle",
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreathingState {
    pub phase: BreathingPhase,
    /// Seconds already spent in the current phase.
    pub second: u64,
    pub cycle: u64,
    pub instruction: &'static str,
}

pub fn cycle_seconds() -> u64 {
    BREATHING_PATTERN.iter().map(|step| step.seconds).sum()
}

pub fn breathing_state_at(elapsed: u64) -> BreathingState {
    let cycle_length = cycle_seconds();
    let cycle = elapsed / cycle_length;
    let mut offset = elapsed % cycle_length;

    for step in &BREATHING_PATTERN {
        if offset < step.seconds {
            return BreathingState {
                phase: step.phase,
                second: offset,
                cycle,
                instruction: step.instruction,
            };
        }
        offset -= step.seconds;
    }

    unreachable!("offset is always smaller than the cycle length")
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct MeditationPreset {
    pub minutes: u32,
    pub label: &'static str,
}

pub const MEDITATION_PRESETS: [MeditationPreset; 5] = [
    MeditationPreset {
        minutes: 3,
        label: "3 minutes - Quick Reset",
    },
    MeditationPreset {
        minutes: 5,
        label: "5 minutes - Mindful Moment",
    },
    MeditationPreset {
        minutes: 10,
        label: "10 minutes - Deep Relaxation",
    },
    MeditationPreset {
        minutes: 15,
        label: "15 minutes - Extended Practice",
    },
    MeditationPreset {
        minutes: 20,
        label: "20 minutes - Full Session",
    },
];

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct GuidedStep {
    /// Seconds from the start of the session.
    pub at: u64,
    pub instruction: &'static str,
}

pub const GUIDED_STEPS: [GuidedStep; 6] = [
    GuidedStep {
        at: 0,
        instruction: "Find a comfortable seated position and close your eyes",
    },
    GuidedStep {
        at: 30,
        instruction: "Take three deep breaths, inhaling through your nose",
    },
    GuidedStep {
        at: 60,
        instruction: "Notice your natural breathing rhythm",
    },
    GuidedStep {
        at: 120,
        instruction: "If your mind wanders, gently return focus to your breath",
    },
    GuidedStep {
        at: 180,
        instruction: "Scan your body from head to toe, releasing any tension",
    },
    GuidedStep {
        at: 240,
        instruction: "Continue breathing mindfully, staying present",
    },
];

const DEFAULT_GUIDANCE: &str = "Focus on your breath and stay present";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeditationState {
    pub instruction: &'static str,
    pub remaining_seconds: u64,
    pub complete: bool,
}

/// `None` when `minutes` is not one of the presets.
pub fn meditation_state_at(minutes: u32, elapsed: u64) -> Option<MeditationState> {
    let preset = MEDITATION_PRESETS.iter().find(|p| p.minutes == minutes)?;
    let total = u64::from(preset.minutes) * 60;
    let elapsed = elapsed.min(total);

    let instruction = GUIDED_STEPS
        .iter()
        .filter(|step| elapsed >= step.at)
        .last()
        .map(|step| step.instruction)
        .unwrap_or(DEFAULT_GUIDANCE);

    Some(MeditationState {
        instruction,
        remaining_seconds: total - elapsed,
        complete: elapsed == total,
    })
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
    pub category: &'static str,
    /// Path of the guided tool, when the activity has one.
    pub path: Option<&'static str>,
}

pub const ACTIVITIES: [Activity; 6] = [
    Activity {
        title: "5-Minute Breathing Exercise",
        description: "A simple breathing technique to help you feel calm and centered.",
        duration: "5 minutes",
        difficulty: "Beginner",
        category: "Breathing",
        path: Some("/self-care/breathing"),
    },
    Activity {
        title: "Gratitude Journaling",
        description: "Write down three things you're grateful for today.",
        duration: "10 minutes",
        difficulty: "Beginner",
        category: "Mindfulness",
        path: Some("/self-care/gratitude"),
    },
    Activity {
        title: "Guided Meditation",
        description: "A peaceful meditation session to help you find inner calm.",
        duration: "5-20 minutes",
        difficulty: "Beginner",
        category: "Meditation",
        path: Some("/self-care/meditation"),
    },
    Activity {
        title: "Mood Boosting Playlist",
        description: "Listen to uplifting music curated for mental wellness.",
        duration: "20 minutes",
        difficulty: "Beginner",
        category: "Music",
        path: None,
    },
    Activity {
        title: "Evening Wind-Down Routine",
        description: "A calming routine to help you prepare for restful sleep.",
        duration: "30 minutes",
        difficulty: "Beginner",
        category: "Sleep",
        path: None,
    },
    Activity {
        title: "Mindful Walking",
        description: "Take a slow, intentional walk while focusing on your surroundings.",
        duration: "15 minutes",
        difficulty: "Beginner",
        category: "Movement",
        path: None,
    },
];
