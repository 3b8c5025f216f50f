use crate::rubric::buckets::{Bucket, BucketTable};
use crate::rubric::{
    EngagementRule, FillerRule, FlowRule, FlowStage, Rubric, SalutationRule, SalutationTier, Slot,
    SlotGroup,
};

const EXCELLENT_GREETINGS: &[&str] = &[
    "i am excited to",
    "i'm excited to",
    "it is my pleasure",
    "it's my pleasure",
    "i am very happy to",
    "i'm very happy to",
    "i am glad to",
    "i'm glad to",
];
const GOOD_GREETINGS: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "greetings",
];
const NORMAL_GREETINGS: &[&str] = &["hi ", "hello ", "hey "];

const SALUTATION_TIERS: &[SalutationTier] = &[
    SalutationTier {
        name: "excellent",
        score: 5.0,
        phrases: EXCELLENT_GREETINGS,
    },
    SalutationTier {
        name: "good",
        score: 4.0,
        phrases: GOOD_GREETINGS,
    },
    SalutationTier {
        name: "normal",
        score: 2.0,
        phrases: NORMAL_GREETINGS,
    },
    SalutationTier {
        name: "none",
        score: 0.0,
        phrases: &[],
    },
];

const NAME_TRIGGERS: &[&str] = &["my name is", "i am ", "i'm "];
const AGE_TRIGGERS: &[&str] = &["years old", "year old"];

const MUST_HAVE_SLOTS: &[Slot] = &[
    Slot {
        id: "name",
        triggers: NAME_TRIGGERS,
    },
    Slot {
        id: "age",
        triggers: AGE_TRIGGERS,
    },
    Slot {
        id: "class_or_grade",
        triggers: &[
            "class ",
            "grade ",
            "standard ",
            "i study in",
            "i am studying in",
        ],
    },
    Slot {
        id: "school",
        triggers: &["school", "college", "university"],
    },
    Slot {
        id: "hobbies_or_interests_or_goals",
        triggers: &[
            "my hobby",
            "my hobbies",
            "i like to",
            "i love to",
            "my interest",
            "my interests",
            "i want to become",
            "i want to be",
            "my dream is",
            "my goal is",
            "my aim is",
        ],
    },
];

const GOOD_TO_HAVE_SLOTS: &[Slot] = &[
    Slot {
        id: "family_background",
        triggers: &[
            "my family",
            "we are a family",
            "my father",
            "my mother",
            "my parents",
        ],
    },
    Slot {
        id: "origin_location",
        triggers: &["i am from", "i'm from", "i belong to", "i come from"],
    },
    Slot {
        id: "thanks_or_closing",
        triggers: &["thank you", "thanks for listening", "that's all about me"],
    },
    Slot {
        id: "school_highlights",
        triggers: &["i study at", "i am studying at", "my school name is"],
    },
    Slot {
        id: "extra_curricular",
        triggers: &["sports", "music", "dance", "competition", "club"],
    },
];

const FLOW_STAGES: &[FlowStage] = &[
    FlowStage {
        id: "salutation",
        triggers: &[
            "good morning",
            "good afternoon",
            "good evening",
            "hi ",
            "hello ",
            "hey ",
        ],
    },
    FlowStage {
        id: "name",
        triggers: NAME_TRIGGERS,
    },
    FlowStage {
        id: "basic_details",
        triggers: &[
            "years old",
            "year old",
            "class ",
            "grade ",
            "standard ",
            "i study in",
        ],
    },
    FlowStage {
        id: "family_or_origin",
        triggers: &[
            "my family",
            "my father",
            "my mother",
            "i am from",
            "i'm from",
        ],
    },
    FlowStage {
        id: "hobbies_or_goals",
        triggers: &[
            "my hobby",
            "my hobbies",
            "my goal",
            "my aim",
            "i want to be",
            "i want to become",
        ],
    },
];

// Bell curve: both rushed and halting delivery lose points.
const SPEECH_RATE_BUCKETS: &[Bucket] = &[
    Bucket {
        low: 161.0,
        high: f64::INFINITY,
        score: 2.0,
        label: "161–inf",
    },
    Bucket {
        low: 141.0,
        high: 160.0,
        score: 6.0,
        label: "141–160",
    },
    Bucket {
        low: 111.0,
        high: 140.0,
        score: 10.0,
        label: "111–140",
    },
    Bucket {
        low: 81.0,
        high: 110.0,
        score: 6.0,
        label: "81–110",
    },
    Bucket {
        low: 0.0,
        high: 80.0,
        score: 2.0,
        label: "0–80",
    },
];

const TTR_BUCKETS: &[Bucket] = &[
    Bucket {
        low: 0.9,
        high: 1.0,
        score: 10.0,
        label: "0.9–1.0",
    },
    Bucket {
        low: 0.7,
        high: 0.89,
        score: 8.0,
        label: "0.7–0.89",
    },
    Bucket {
        low: 0.5,
        high: 0.69,
        score: 6.0,
        label: "0.5–0.69",
    },
    Bucket {
        low: 0.3,
        high: 0.49,
        score: 4.0,
        label: "0.3–0.49",
    },
    Bucket {
        low: 0.0,
        high: 0.29,
        score: 2.0,
        label: "0.0–0.29",
    },
];

const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "er",
    "ah",
    "like",
    "you know",
    "kind of",
    "sort of",
    "basically",
    "actually",
    "literally",
    "so yeah",
];

// Rate per 100 words; fewer fillers score higher.
const FILLER_BUCKETS: &[Bucket] = &[
    Bucket {
        low: 0.0,
        high: 3.0,
        score: 15.0,
        label: "0–3",
    },
    Bucket {
        low: 4.0,
        high: 6.0,
        score: 12.0,
        label: "4–6",
    },
    Bucket {
        low: 7.0,
        high: 9.0,
        score: 9.0,
        label: "7–9",
    },
    Bucket {
        low: 10.0,
        high: 12.0,
        score: 6.0,
        label: "10–12",
    },
    Bucket {
        low: 13.0,
        high: f64::INFINITY,
        score: 3.0,
        label: "13–inf",
    },
];

const POSITIVE_WORDS: &[&str] = &[
    "excited",
    "happy",
    "glad",
    "honoured",
    "honored",
    "proud",
    "eager",
    "interested",
    "grateful",
    "thankful",
    "delighted",
    "thrilled",
    "joyful",
    "enthusiastic",
];
const NEGATIVE_WORDS: &[&str] = &[
    "sad", "upset", "angry", "bored", "unhappy", "nervous", "anxious", "scared", "afraid",
];

const ENGAGEMENT_BUCKETS: &[Bucket] = &[
    Bucket {
        low: 0.9,
        high: 1.0,
        score: 15.0,
        label: "0.9–1.0",
    },
    Bucket {
        low: 0.7,
        high: 0.89,
        score: 12.0,
        label: "0.7–0.89",
    },
    Bucket {
        low: 0.5,
        high: 0.69,
        score: 9.0,
        label: "0.5–0.69",
    },
    Bucket {
        low: 0.3,
        high: 0.49,
        score: 6.0,
        label: "0.3–0.49",
    },
    Bucket {
        low: 0.0,
        high: 0.29,
        score: 3.0,
        label: "0.0–0.29",
    },
];

pub(crate) static INTRO_RUBRIC_V1: Rubric = Rubric {
    salutation: SalutationRule {
        tiers: SALUTATION_TIERS,
        max_score: 5.0,
    },
    must_have: SlotGroup {
        slots: MUST_HAVE_SLOTS,
        points_per_slot: 4.0,
    },
    good_to_have: SlotGroup {
        slots: GOOD_TO_HAVE_SLOTS,
        points_per_slot: 2.0,
    },
    flow: FlowRule {
        stages: FLOW_STAGES,
        max_score: 5.0,
    },
    speech_rate: BucketTable {
        buckets: SPEECH_RATE_BUCKETS,
        max_score: 10.0,
    },
    vocabulary: BucketTable {
        buckets: TTR_BUCKETS,
        max_score: 10.0,
    },
    clarity: FillerRule {
        fillers: FILLER_WORDS,
        buckets: BucketTable {
            buckets: FILLER_BUCKETS,
            max_score: 15.0,
        },
    },
    engagement: EngagementRule {
        positive: POSITIVE_WORDS,
        negative: NEGATIVE_WORDS,
        neutral_index: 0.5,
        buckets: BucketTable {
            buckets: ENGAGEMENT_BUCKETS,
            max_score: 15.0,
        },
    },
};
