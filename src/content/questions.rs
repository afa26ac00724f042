use super::QuestionPair;

/// Question deck for the odd-one-out variant. The decoy reads close enough
/// to the main question that the odd player's answer blends in at first.
pub const QUESTION_PAIRS: &[QuestionPair] = &[
    QuestionPair {
        id: "bedtime",
        main: "What time do you usually go to bed?",
        decoy: "What time did you go to bed as a ten-year-old?",
    },
    QuestionPair {
        id: "pets",
        main: "How many pets is too many pets?",
        decoy: "How many houseplants is too many houseplants?",
    },
    QuestionPair {
        id: "pizza-topping",
        main: "What is the best pizza topping?",
        decoy: "What is the best burger topping?",
    },
    QuestionPair {
        id: "week-abroad",
        main: "Which country would you most like to spend a week in?",
        decoy: "Which country would you most like to spend a year in?",
    },
    QuestionPair {
        id: "alarm",
        main: "How many alarms do you set on a work morning?",
        decoy: "How many times do you hit snooze on a work morning?",
    },
    QuestionPair {
        id: "celebrity-dinner",
        main: "Which living celebrity would you invite to dinner?",
        decoy: "Which historical figure would you invite to dinner?",
    },
    QuestionPair {
        id: "spicy",
        main: "On a scale of 1 to 10, how spicy do you order your food?",
        decoy: "On a scale of 1 to 10, how sweet do you like your desserts?",
    },
    QuestionPair {
        id: "karaoke",
        main: "What song would you pick at karaoke?",
        decoy: "What song would you pick as your entrance music?",
    },
    QuestionPair {
        id: "shower",
        main: "How long is your average shower in minutes?",
        decoy: "How long is your average bath in minutes?",
    },
    QuestionPair {
        id: "superpower",
        main: "Would you rather fly or be invisible?",
        decoy: "Would you rather read minds or be invisible?",
    },
    QuestionPair {
        id: "breakfast",
        main: "What do you eat for breakfast on a weekday?",
        decoy: "What do you eat for breakfast on a Sunday?",
    },
    QuestionPair {
        id: "phone-checks",
        main: "How many times a day do you check your phone?",
        decoy: "How many times a day do you check your email?",
    },
    QuestionPair {
        id: "movie-rewatch",
        main: "Which movie have you rewatched the most?",
        decoy: "Which TV show have you rewatched the most?",
    },
    QuestionPair {
        id: "lottery",
        main: "What is the first thing you would buy after winning the lottery?",
        decoy: "What is the first thing you would buy after a big raise?",
    },
    QuestionPair {
        id: "season",
        main: "What is the best season of the year?",
        decoy: "What is the best month of the year?",
    },
    QuestionPair {
        id: "cooking",
        main: "What dish are you best at cooking?",
        decoy: "What dish do you most often order in?",
    },
    QuestionPair {
        id: "age-felt",
        main: "What age do you feel on the inside?",
        decoy: "What age would you like to stay forever?",
    },
    QuestionPair {
        id: "island-item",
        main: "What one item would you bring to a desert island?",
        decoy: "What one item would you grab from your home in a fire?",
    },
    QuestionPair {
        id: "meeting-length",
        main: "How long should a work meeting last at most?",
        decoy: "How long should a phone call with a friend last at most?",
    },
    QuestionPair {
        id: "hotdog",
        main: "Is a hot dog a sandwich?",
        decoy: "Is cereal a soup?",
    },
    QuestionPair {
        id: "time-travel",
        main: "Would you travel 100 years into the past or the future?",
        decoy: "Would you travel 1000 years into the past or the future?",
    },
    QuestionPair {
        id: "chores",
        main: "What household chore do you secretly enjoy?",
        decoy: "What household chore do you avoid the longest?",
    },
];
