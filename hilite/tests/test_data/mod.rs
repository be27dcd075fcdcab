//! Shared documents for the integration tests

/// Restaurant review with one dense cluster of keywords
pub const REVIEW_DOCUMENT: &str = concat!(
    "I couldn't get that pizza out of my mind after trying it for ",
    "the first time a few weeks ago so when our plans to go to the drive in movies ",
    "fell through I told hubby let's get some pizza and watch movies at home.",
    "So once again we tried the deep dish pepperoni pizza and once again it was amazingly good!",
    "We also tried the mozerella bread this time which was tasty but a little too buttery for my taste. ",
    " While hubby was in the store they gave him a big sample of a calzone. He brought a couple bites back ",
    "for me and it was great.   They even gave him a magnet which I will totally apply to my refrigerator! ",
    "Love you Rocky's! Can't wait to try more of the menu.",
);

/// Prose that shares no words with a pizza query
pub const NO_MATCH_DOCUMENT: &str = concat!(
    "that is, a sentence-break iterator returns breaks that each ",
    "represent the end of one sentence and the beginning of the next. With the ",
    "word-break iterator, the characters between two boundaries might be",
    " a word, or they might be the punctuation or whitespace between two words.",
);

/// Long article where the full phrase `deep dish pizza` occurs four times
pub const CHICAGO_DOCUMENT: &str = concat!(
    "I like fish. Little star's deep dish pizza sure is fantastic.",
    " Dogs are funny. Deep Dish pizza is yummy. Pizzas are full of nutrition,esp deep dish pizzas are good. They can be",
    "made using deep dish too. I have a flat dish. Can we order pizza tonight? What makes Chicago deep dish pizza different",
    " is of course that it is not very much like a  classic Italian pizza, with thin crusts and delicate toppings.  During the",
    " depression of the thirties, followed by the war years of the forties, Americans ate one-dish meals of casseroles",
    " -- easily procured ingredients that would satisfy the stomach, stretch the budget and not cost many ration coupons.",
    " Therefore, the more you could load onto a pizza crust, the better it would be, and doubtless a deep pan would be more ",
    "like a casserole.   Moreover, the crust would not need the fancy stretching and pushing, even tossing, that the traditional",
    "  Italian thin pizza would require.  The mozzarella cheese would be on the bottom and the crust and toppings would all  ",
    "bake and ooze together and become one of America's legacies to fat foods nationwide and waistwide.  ",
    "It's an indulgence a teenager could hardly resist after a ballgame, let alone someone who might be escaping the chill",
    " of the Windy City on a snowy night.",
);

/// Snippet with several keyword runs, including one joined by a full stop
pub const PADDING_SNIPPET: &str = concat!(
    "deep dish pizza sure is fantastic. Dogs are funny. Deep Dish pizza is yummy. ",
    "Dish should be deep. Deep dish is best when hot. Dish pizza is also ok",
);

/// Start offsets of `deep dish pizza` in `CHICAGO_DOCUMENT`
pub const CHICAGO_PHRASE_OFFSETS: [usize; 4] = [27, 78, 137, 268];
