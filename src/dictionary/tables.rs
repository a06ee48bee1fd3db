//! Built-in surface-form tables.
//!
//! Each table is a list of `(canonical id, surface forms)` groups. Surface
//! forms are lowercase and written in base form; the matcher handles
//! plurals, possessives and -ed/-ing inflections of single words.

pub type Group = (&'static str, &'static [&'static str]);

// ═══════════════════════════════════════════
// Symptoms
// ═══════════════════════════════════════════

pub const SYMPTOMS: &[Group] = &[
    ("fatigue", &[
        "tired", "exhausted", "exhaustion", "fatigue", "fatigued", "drained", "wiped out",
        "worn out", "knackered", "energy", "low energy", "no energy", "zero energy",
        "lethargic", "lethargy", "sluggish", "run down", "weary", "shattered", "sleepy",
        "bone tired", "dead tired", "out of spoons", "no spoons", "low on spoons",
    ]),
    ("brain_fog", &[
        "brain fog", "brain fogged", "foggy", "fog", "fuzzy headed", "can't think",
        "can't think straight", "couldn't think", "can't concentrate", "couldn't concentrate",
        "trouble concentrating", "confused", "confusion", "forgetful", "spaced out", "spacey",
        "word finding", "memory problems",
    ]),
    ("pem", &[
        "pem", "crash", "post exertional malaise", "payback", "paying for it", "hit a wall",
        "hit the wall",
    ]),
    ("flare", &["flare", "flare up", "flaring", "flared up"]),
    ("pain", &[
        "pain", "painful", "ache", "achy", "hurt", "sore", "soreness", "agony",
    ]),
    ("headache", &[
        "headache", "head ache", "head hurt", "head is pounding", "head was pounding",
        "pounding head",
    ]),
    ("migraine", &["migraine"]),
    ("nausea", &[
        "nausea", "nauseous", "nauseated", "queasy", "sick to my stomach", "feel sick",
        "felt sick", "feeling sick",
    ]),
    ("vomiting", &["vomit", "threw up", "throwing up", "puke"]),
    ("dizziness", &[
        "dizzy", "dizziness", "lightheaded", "light headed", "vertigo", "room spinning",
        "woozy",
    ]),
    ("insomnia", &[
        "insomnia", "can't sleep", "couldn't sleep", "cannot sleep", "could not sleep",
        "sleepless", "trouble sleeping", "not sleeping", "barely slept", "didn't sleep",
        "no sleep",
    ]),
    ("unrefreshing_sleep", &["unrefreshing", "unrefreshing sleep", "unrefreshed"]),
    ("joint_pain", &["joint pain", "joints ache", "achy joints", "arthralgia"]),
    ("muscle_pain", &[
        "muscle pain", "muscle ache", "myalgia", "sore muscles", "body ache",
        "aching muscles",
    ]),
    ("muscle_weakness", &["weak", "weakness", "muscle weakness", "heavy limbs", "jelly legs"]),
    ("stiffness", &["stiff", "stiffness"]),
    ("cramps", &["cramp", "cramping"]),
    ("anxiety", &["anxious", "anxiety", "panic", "panicky", "on edge", "nervous", "panic attack"]),
    ("low_mood", &["depressed", "depression", "low mood", "sad", "hopeless", "feeling low"]),
    ("irritability", &["irritable", "cranky", "snappy"]),
    ("palpitations", &[
        "palpitations", "heart racing", "racing heart", "heart pounding", "pounding heart",
        "tachycardia",
    ]),
    ("orthostatic_intolerance", &["orthostatic intolerance", "pots", "blood pooling"]),
    ("shortness_of_breath", &[
        "short of breath", "shortness of breath", "breathless", "out of breath",
        "can't breathe", "couldn't breathe", "air hunger", "winded",
    ]),
    ("chest_pain", &["chest pain", "chest hurt", "tight chest", "chest tightness"]),
    ("back_pain", &["back pain", "back hurt", "backache", "lower back pain"]),
    ("neck_pain", &["neck pain", "stiff neck", "neck hurt"]),
    ("stomach_pain", &[
        "stomach ache", "stomachache", "stomach pain", "tummy ache", "belly ache",
        "abdominal pain", "stomach hurt",
    ]),
    ("nerve_pain", &["nerve pain", "neuropathy"]),
    ("bloating", &["bloated", "bloating"]),
    ("diarrhea", &["diarrhea", "diarrhoea", "loose stools"]),
    ("constipation", &["constipated", "constipation"]),
    ("fever", &["fever", "feverish", "running a temperature"]),
    ("chills", &["chills", "shivering", "shivers"]),
    ("sweating", &["sweaty", "sweating"]),
    ("night_sweats", &["night sweats"]),
    ("sore_throat", &["sore throat", "scratchy throat", "throat hurt"]),
    ("swollen_lymph_nodes", &["swollen glands", "swollen lymph nodes", "tender glands"]),
    ("numbness", &["numb", "numbness"]),
    ("tingling", &["tingling", "tingly", "pins and needles"]),
    ("tremor", &["tremor", "shaky", "shaking", "trembling"]),
    ("light_sensitivity", &["light sensitivity", "sensitive to light", "photophobia"]),
    ("noise_sensitivity", &[
        "noise sensitivity", "sensitive to noise", "sensitive to sound", "hyperacusis",
    ]),
    ("sensory_overload", &["sensory overload", "overstimulated"]),
    ("rash", &["rash", "hives"]),
    ("itching", &["itchy", "itching", "itch"]),
    ("heartburn", &["heartburn", "reflux", "acid reflux"]),
    ("loss_of_appetite", &["no appetite", "loss of appetite", "not hungry"]),
];

/// Symptoms that carry pain qualifiers and a body location.
pub const PAIN_SYMPTOMS: &[&str] = &[
    "pain", "headache", "migraine", "joint_pain", "muscle_pain", "back_pain", "neck_pain",
    "chest_pain", "stomach_pain", "nerve_pain", "cramps", "sore_throat",
];

// ═══════════════════════════════════════════
// Pain attributes
// ═══════════════════════════════════════════

pub const PAIN_QUALIFIERS: &[Group] = &[
    ("burning", &["burning", "burn"]),
    ("sharp", &["sharp"]),
    ("stabbing", &["stabbing", "stab"]),
    ("shooting", &["shooting"]),
    ("throbbing", &["throbbing", "throb", "pulsing", "pounding"]),
    ("dull", &["dull"]),
    ("aching", &["aching", "achy"]),
    ("sore", &["sore", "tender"]),
    ("cramping", &["cramping", "crampy"]),
    ("electric", &["electric", "electric shock", "zapping"]),
    ("stinging", &["stinging"]),
    ("pressure", &["pressure", "squeezing", "crushing"]),
    ("gnawing", &["gnawing", "nagging"]),
    ("tight", &["tight", "tightness"]),
    ("searing", &["searing"]),
    ("piercing", &["piercing"]),
    ("deep", &["deep"]),
];

pub const PAIN_CONSISTENCY: &[Group] = &[
    ("constant", &["constant", "constantly", "nonstop", "non stop", "persistent"]),
    ("intermittent", &[
        "intermittent", "on and off", "off and on", "comes and goes", "came and went",
    ]),
];

pub const PAIN_ONSET: &[Group] = &[
    ("sudden_onset", &["sudden", "suddenly", "out of nowhere", "came on fast"]),
    ("gradual_onset", &["gradual", "gradually", "crept up", "building up"]),
];

// ═══════════════════════════════════════════
// Body locations
// ═══════════════════════════════════════════

pub const BODY_LOCATIONS: &[Group] = &[
    ("head", &["head", "skull"]),
    ("forehead", &["forehead"]),
    ("temples", &["temple", "temples"]),
    ("face", &["face", "cheek", "sinus"]),
    ("jaw", &["jaw", "teeth"]),
    ("eyes", &["eye", "behind my eyes"]),
    ("ears", &["ear"]),
    ("throat", &["throat"]),
    ("neck", &["neck"]),
    ("shoulder", &["shoulder", "shoulder blade"]),
    ("arm", &["arm", "upper arm", "forearm"]),
    ("hand", &["hand", "finger", "thumb"]),
    ("chest", &["chest", "rib", "ribcage"]),
    ("stomach", &["stomach", "tummy", "belly", "abdomen", "gut"]),
    ("back", &["back", "spine"]),
    ("lower_back", &["lower back", "lumbar"]),
    ("upper_back", &["upper back"]),
    ("pelvis", &["pelvis", "pelvic", "groin"]),
    ("leg", &["leg", "lower leg", "shin"]),
    ("foot", &["foot", "feet", "toe", "heel"]),
    ("skin", &["skin"]),
];

pub const JOINT_LOCATIONS: &[Group] = &[
    ("joints", &["joint", "all my joints", "every joint"]),
    ("knee", &["knee"]),
    ("hip", &["hip"]),
    ("wrist", &["wrist"]),
    ("elbow", &["elbow"]),
    ("ankle", &["ankle"]),
    ("knuckles", &["knuckle", "finger joints"]),
];

pub const MUSCLE_LOCATIONS: &[Group] = &[
    ("muscles", &["muscle", "all my muscles"]),
    ("calves", &["calf", "calves"]),
    ("thighs", &["thigh"]),
    ("quads", &["quad"]),
    ("hamstrings", &["hamstring"]),
    ("glutes", &["glute"]),
    ("biceps", &["bicep", "biceps"]),
];

pub const BILATERAL_LOCATIONS: &[Group] = &[
    ("shoulders_bilateral", &["both shoulders"]),
    ("arms_bilateral", &["both arms"]),
    ("hands_bilateral", &["both hands"]),
    ("legs_bilateral", &["both legs"]),
    ("feet_bilateral", &["both feet"]),
    ("knees_bilateral", &["both knees"]),
    ("hips_bilateral", &["both hips"]),
    ("wrists_bilateral", &["both wrists"]),
    ("ankles_bilateral", &["both ankles"]),
    ("sides_bilateral", &["both sides"]),
];

pub const RADIATION_PATTERNS: &[Group] = &[
    ("radiating_arm", &["down my arm", "radiating down my arm", "shooting down my arm"]),
    ("radiating_leg", &[
        "down my leg", "radiating down my leg", "shooting down my leg", "down the back of my leg",
    ]),
    ("radiating_legs_bilateral", &["down both legs", "down my legs"]),
    ("radiating_back", &["down my back", "down my spine", "up my back", "up my spine"]),
    ("radiating_neck", &["up my neck", "into my neck"]),
    ("radiating_jaw", &["into my jaw"]),
    ("radiating_shoulder", &["into my shoulder"]),
];

pub const MULTI_LOCATIONS: &[Group] = &[
    ("whole_body", &[
        "all over", "all over my body", "everywhere", "whole body", "entire body",
        "head to toe", "from head to toe", "everything hurt",
    ]),
];

// ═══════════════════════════════════════════
// Activities
// ═══════════════════════════════════════════

pub const ACTIVITIES: &[Group] = &[
    ("shopping", &["shopping", "grocery shopping", "food shopping", "groceries", "errands", "running errands"]),
    ("showering", &["shower", "showering", "bath", "washing my hair"]),
    ("walking", &["walk", "walking", "short walk", "long walk", "dog walk", "walking the dog"]),
    ("housework", &[
        "cooking", "cleaning", "housework", "house work", "laundry", "doing laundry",
        "vacuuming", "hoovering", "mopping", "dishes", "washing up", "tidying",
    ]),
    ("work", &["work", "working", "shift", "meeting", "workday", "commute"]),
    ("driving", &["drive", "driving"]),
    ("exercise", &[
        "exercise", "workout", "working out", "gym", "yoga", "swimming", "cycling",
        "physical therapy", "physio", "stretching", "pilates", "lifting",
    ]),
    ("socializing", &[
        "socializing", "socialising", "party", "family dinner", "visitors", "visit",
        "conversation", "talking", "church", "concert", "wedding",
    ]),
    ("stairs", &["stairs", "climbing stairs", "flight of stairs"]),
    ("standing", &["standing", "standing up", "queueing", "queuing"]),
    ("gardening", &["gardening", "yard work", "weeding", "mowing"]),
    ("screen_time", &["screen time", "phone call", "video call", "zoom call", "reading", "computer"]),
    ("appointment", &[
        "appointment", "doctor appointment", "doctor's appointment", "hospital appointment",
        "blood test",
    ]),
    ("travel", &["travel", "travelling", "traveling", "flight", "trip", "train ride"]),
    ("eating", &["eating", "meal", "big meal", "dinner", "lunch", "breakfast"]),
    ("getting_dressed", &["getting dressed"]),
    ("school_run", &["school run"]),
];

// ═══════════════════════════════════════════
// Cue tables
// ═══════════════════════════════════════════

pub const NEGATION_CUES: &[Group] = &[
    ("negation", &[
        "not", "no", "never", "isn't", "wasn't", "aren't", "weren't", "don't", "doesn't",
        "didn't", "haven't", "hasn't", "hadn't", "ain't", "isnt", "wasnt", "dont", "doesnt",
        "didnt", "havent", "hasnt", "without", "none", "nor", "neither", "no longer",
    ]),
];

pub const CONTRASTIVE_CUES: &[Group] = &[
    ("contrast", &["but", "though", "although", "however", "yet", "except"]),
];

pub const SEVERITY_KEYWORDS: &[Group] = &[
    ("mild", &[
        "mild", "mildly", "minor", "slight", "manageable", "tolerable", "bearable",
        "not too bad",
    ]),
    ("moderate", &["moderate", "moderately", "medium", "noticeable", "pretty bad"]),
    ("severe", &[
        "severe", "severely", "terrible", "terribly", "awful", "horrible", "horrendous",
        "excruciating", "unbearable", "debilitating", "intense", "agonizing", "agonising",
        "crippling", "brutal", "the worst", "worst", "extreme",
    ]),
];

pub const INTENSITY_MODIFIERS: &[Group] = &[
    ("mild", &[
        "a bit", "a little", "a little bit", "slightly", "somewhat", "kind of", "kinda",
        "sort of", "a tad", "a touch",
    ]),
    ("moderate", &["pretty", "quite", "fairly", "rather"]),
    ("severe", &[
        "very", "really", "extremely", "super", "so bad", "really bad", "incredibly",
        "insanely", "ridiculously", "seriously", "hard", "badly", "majorly",
    ]),
];

pub const COMPARATIVES: &[Group] = &[
    ("escalate", &[
        "worse", "worse than", "getting worse", "worsening", "more than usual", "worse today",
    ]),
    ("deescalate", &[
        "better", "better than", "improving", "improved", "easing", "eased", "less than usual",
        "not as bad",
    ]),
];

pub const TIMES_OF_DAY: &[Group] = &[
    ("morning", &[
        "morning", "this morning", "in the morning", "when i woke up", "on waking",
        "upon waking", "first thing", "woke up",
    ]),
    ("afternoon", &["afternoon", "this afternoon", "in the afternoon", "midday", "lunchtime"]),
    ("evening", &["evening", "this evening", "in the evening", "tonight", "dinnertime"]),
    ("night", &[
        "night", "at night", "last night", "overnight", "in the night", "middle of the night",
        "bedtime", "all night",
    ]),
    ("all_day", &[
        "all day", "all day long", "whole day", "the whole day", "throughout the day",
        "the entire day",
    ]),
];

pub const TRIGGER_CUES: &[Group] = &[
    ("after", &["after", "following"]),
    ("during", &["during", "while"]),
    ("from", &["from", "because of", "due to"]),
];

pub const ONGOING_CUES: &[Group] = &[
    ("ongoing", &[
        "ongoing", "nonstop", "non stop", "all the time", "won't go away", "wont go away",
        "still going", "never ending", "persistent",
    ]),
];

/// Canonical ids encode `<qualifier>_<unit>`.
pub const QUALIFIED_DURATIONS: &[Group] = &[
    ("all_days", &[
        "all day", "all day long", "whole day", "the whole day", "the entire day", "for days",
    ]),
    ("most_of_days", &["most of the day", "much of the day"]),
    ("all_hours", &[
        "all night", "all night long", "all morning", "all afternoon", "all evening",
        "for hours", "hours on end",
    ]),
    ("most_of_hours", &[
        "most of the night", "most of the morning", "most of the afternoon",
        "most of the evening",
    ]),
];

/// Canonical severity when no cue applies.
pub const SEVERITY_DEFAULTS: &[(&str, &str)] = &[
    ("pem", "severe"),
    ("flare", "severe"),
    ("fatigue", "moderate"),
    ("brain_fog", "moderate"),
];
