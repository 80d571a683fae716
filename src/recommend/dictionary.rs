//! Built-in word and phrase dictionary for prefix completion
//!
//! Order matters: completions are ranked by position in this list.

/// Default completion dictionary (words first, then short phrases)
pub const WORD_DICT: &[&str] = &[
    // Common words
    "HELLO", "HELP", "YES", "NO", "PLEASE", "THANKYOU", "SORRY", "WELCOME",
    "GOOD", "BAD", "AMAZING", "NICE", "LOVE", "LIKE", "HATE",
    // Daily life
    "WATER", "FOOD", "APPLE", "BREAD", "RICE", "MILK", "TEA", "COFFEE",
    "EAT", "DRINK", "SLEEP", "WAKE", "HOME", "OFFICE", "SCHOOL", "COLLEGE",
    // People
    "MOTHER", "FATHER", "BROTHER", "SISTER", "FRIEND", "TEACHER", "STUDENT",
    // Places
    "INDIA", "HOSPITAL", "MARKET", "PARK", "HOTEL", "ROOM",
    // Actions
    "GO", "COME", "STOP", "WAIT", "RUN", "WALK", "SIT", "STAND",
    // Emotions
    "HAPPY", "SAD", "ANGRY", "EXCITED", "TIRED", "SCARED",
    // Technology
    "PHONE", "LAPTOP", "INTERNET", "CAMERA", "MACHINE", "AI", "ROBOT",
    // Phrases
    "HELLO HOW ARE YOU",
    "I NEED HELP",
    "THANK YOU VERY MUCH",
    "PLEASE HELP ME",
    "I AM FINE",
    "GOOD MORNING",
    "GOOD NIGHT",
    "WHAT IS YOUR NAME",
    "MY NAME IS",
    "I AM LEARNING SIGN LANGUAGE",
    "THIS IS AMAZING",
    "I LOVE MACHINE LEARNING",
    "WELCOME TO INDIA",
    "HAVE A NICE DAY",
    "SEE YOU SOON",
    "TAKE CARE",
    "PLEASE WAIT",
    "STOP HERE",
    "GO HOME",
    "I AM HAPPY",
    "I AM SAD",
    "I NEED WATER",
    "I NEED FOOD",
    "CALL THE DOCTOR",
    "OPEN THE DOOR",
    "CLOSE THE DOOR",
    "TURN ON THE LIGHT",
    "TURN OFF THE LIGHT",
];
