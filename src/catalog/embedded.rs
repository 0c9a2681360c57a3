//! Embedded word catalog
//!
//! The built-in word list, grouped by theme. Declaration order is the order
//! `WordCatalog::filter_by_difficulty(All)` returns.

use super::entry::Category::{
    Animals, Body, Clothing, Colors, Emotions, Food, Fun, Nature, Objects, Places, Transport,
    Weather,
};
use super::entry::WordEntry;
use crate::core::Difficulty::{Easy, Hard, Medium};

/// Every built-in word with its pictogram, difficulty and theme
pub const WORDS: &[WordEntry] = &[
    // Animals
    WordEntry::new("ant", "🐜", Easy, Animals),
    WordEntry::new("bear", "🐻", Medium, Animals),
    WordEntry::new("bee", "🐝", Medium, Animals),
    WordEntry::new("bird", "🐦", Medium, Animals),
    WordEntry::new("bug", "🐛", Easy, Animals),
    WordEntry::new("cat", "🐱", Easy, Animals),
    WordEntry::new("cow", "🐄", Medium, Animals),
    WordEntry::new("dog", "🐶", Easy, Animals),
    WordEntry::new("duck", "🦆", Medium, Animals),
    WordEntry::new("fish", "🐟", Medium, Animals),
    WordEntry::new("fox", "🦊", Easy, Animals),
    WordEntry::new("frog", "🐸", Medium, Animals),
    WordEntry::new("giraffe", "🦒", Hard, Animals),
    WordEntry::new("goat", "🐐", Medium, Animals),
    WordEntry::new("koala", "🐨", Medium, Animals),
    WordEntry::new("lion", "🦁", Medium, Animals),
    WordEntry::new("mouse", "🐭", Hard, Animals),
    WordEntry::new("owl", "🦉", Medium, Animals),
    WordEntry::new("panda", "🐼", Medium, Animals),
    WordEntry::new("penguin", "🐧", Hard, Animals),
    WordEntry::new("pig", "🐷", Easy, Animals),
    WordEntry::new("rabbit", "🐰", Medium, Animals),
    WordEntry::new("shark", "🦈", Medium, Animals),
    WordEntry::new("snail", "🐌", Medium, Animals),
    WordEntry::new("tiger", "🐯", Medium, Animals),
    WordEntry::new("turtle", "🐢", Medium, Animals),
    WordEntry::new("wolf", "🐺", Medium, Animals),
    WordEntry::new("zebra", "🦓", Medium, Animals),
    // Body
    WordEntry::new("arm", "💪", Easy, Body),
    WordEntry::new("ear", "👂", Medium, Body),
    WordEntry::new("eye", "👁️", Hard, Body),
    WordEntry::new("foot", "🦶", Medium, Body),
    WordEntry::new("hand", "👋", Easy, Body),
    WordEntry::new("heart", "❤️", Medium, Body),
    WordEntry::new("leg", "🦵", Easy, Body),
    WordEntry::new("mouth", "👄", Hard, Body),
    WordEntry::new("nose", "👃", Medium, Body),
    WordEntry::new("tongue", "👅", Hard, Body),
    // Transport
    WordEntry::new("bike", "🚲", Medium, Transport),
    WordEntry::new("boat", "⛵", Medium, Transport),
    WordEntry::new("bus", "🚌", Easy, Transport),
    WordEntry::new("car", "🚗", Easy, Transport),
    WordEntry::new("plane", "✈️", Medium, Transport),
    WordEntry::new("ship", "🚢", Medium, Transport),
    WordEntry::new("train", "🚂", Medium, Transport),
    // Objects
    WordEntry::new("ball", "🏀", Medium, Objects),
    WordEntry::new("bath", "🛁", Medium, Objects),
    WordEntry::new("bed", "🛏️", Easy, Objects),
    WordEntry::new("book", "📚", Medium, Objects),
    WordEntry::new("box", "📦", Easy, Objects),
    WordEntry::new("brush", "🪥", Medium, Objects),
    WordEntry::new("bucket", "🪣", Medium, Objects),
    WordEntry::new("camera", "📷", Medium, Objects),
    WordEntry::new("cart", "🛒", Medium, Objects),
    WordEntry::new("chair", "🪑", Medium, Objects),
    WordEntry::new("clock", "⏳", Medium, Objects),
    WordEntry::new("coin", "🪙", Medium, Objects),
    WordEntry::new("compass", "🧭", Hard, Objects),
    WordEntry::new("door", "🚪", Medium, Objects),
    WordEntry::new("gear", "⚙️", Medium, Objects),
    WordEntry::new("gift", "🎁", Medium, Objects),
    WordEntry::new("hammer", "🔨", Medium, Objects),
    WordEntry::new("hat", "🎩", Easy, Objects),
    WordEntry::new("key", "🔑", Medium, Objects),
    WordEntry::new("kite", "🪁", Medium, Objects),
    WordEntry::new("knife", "🔪", Medium, Objects),
    WordEntry::new("mailbox", "📬", Medium, Objects),
    WordEntry::new("map", "🗺️", Easy, Objects),
    WordEntry::new("mop", "🧹", Easy, Objects),
    WordEntry::new("pen", "🖊️", Easy, Objects),
    WordEntry::new("pencil", "✏️", Medium, Objects),
    WordEntry::new("phone", "☎️", Medium, Objects),
    WordEntry::new("pill", "💊", Medium, Objects),
    WordEntry::new("plunger", "🪠", Hard, Objects),
    WordEntry::new("saw", "🪚", Easy, Objects),
    WordEntry::new("shield", "🛡️", Medium, Objects),
    WordEntry::new("soap", "🧼", Medium, Objects),
    WordEntry::new("sock", "🧦", Medium, Objects),
    WordEntry::new("sword", "🗡️", Hard, Objects),
    WordEntry::new("toilet", "🚽", Medium, Objects),
    WordEntry::new("candle", "🕯️", Medium, Objects),
    WordEntry::new("wand", "🪄", Medium, Objects),
    // Nature
    WordEntry::new("ice", "🧊", Medium, Nature),
    WordEntry::new("leaf", "🍃", Medium, Nature),
    WordEntry::new("moon", "🌙", Medium, Nature),
    WordEntry::new("rain", "🌧️", Medium, Nature),
    WordEntry::new("snow", "❄️", Medium, Nature),
    WordEntry::new("star", "⭐", Easy, Nature),
    WordEntry::new("sun", "☀️", Easy, Nature),
    WordEntry::new("tree", "🌳", Medium, Nature),
    WordEntry::new("web", "🕸️", Easy, Nature),
    // Food
    WordEntry::new("cake", "🎂", Medium, Food),
    WordEntry::new("egg", "🥚", Easy, Food),
    WordEntry::new("honey", "🍯", Hard, Food),
    WordEntry::new("nut", "🥜", Easy, Food),
    WordEntry::new("banana", "🍌", Medium, Food),
    WordEntry::new("apple", "🍎", Medium, Food),
    // Listed under colors as well; the color entry wins but keeps this slot
    WordEntry::new("orange", "🟧", Medium, Colors),
    WordEntry::new("pear", "🍐", Easy, Food),
    WordEntry::new("pineapple", "🍍", Hard, Food),
    WordEntry::new("strawberry", "🍓", Hard, Food),
    // Places
    WordEntry::new("house", "🏠", Hard, Places),
    WordEntry::new("beach", "🏖️", Hard, Places),
    WordEntry::new("mountain", "🏔️", Hard, Places),
    // Colors
    WordEntry::new("red", "🟥", Easy, Colors),
    WordEntry::new("yellow", "🟨", Medium, Colors),
    WordEntry::new("green", "🟩", Medium, Colors),
    WordEntry::new("blue", "🟦", Easy, Colors),
    WordEntry::new("purple", "🟪", Medium, Colors),
    WordEntry::new("black", "⬛", Medium, Colors),
    WordEntry::new("white", "⬜", Medium, Colors),
    WordEntry::new("brown", "🟫", Medium, Colors),
    // Clothing
    WordEntry::new("shoe", "👟", Easy, Clothing),
    WordEntry::new("coat", "🧥", Medium, Clothing),
    WordEntry::new("scarf", "🧣", Medium, Clothing),
    WordEntry::new("glove", "🧤", Medium, Clothing),
    WordEntry::new("dress", "👗", Medium, Clothing),
    WordEntry::new("shirt", "👕", Medium, Clothing),
    // Weather
    WordEntry::new("cloud", "☁️", Medium, Weather),
    WordEntry::new("wind", "💨", Medium, Weather),
    // Emotions
    WordEntry::new("sad", "😢", Easy, Emotions),
    WordEntry::new("happy", "😃", Medium, Emotions),
    WordEntry::new("mad", "😠", Easy, Emotions),
    // Fun
    WordEntry::new("poop", "💩", Medium, Fun),
];

/// Number of entries in [`WORDS`]
pub const WORDS_COUNT: usize = WORDS.len();
