//! English stop words. High-frequency function words never become targets.

use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    // articles, determiners and quantifiers
    "a", "an", "the", "this", "that", "these", "those", "all", "any", "both", "each", "either",
    "every", "few", "many", "more", "most", "much", "neither", "no", "none", "nor", "other",
    "others", "several", "some", "such", "own", "same", "various", "enough", "another",
    // pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "one",
    "anyone", "anything", "everyone", "everything", "nobody", "noone", "nothing", "someone",
    "something", "somehow", "anyhow", "anyway", "whatever", "whoever", "whom", "whose",
    // be / have / do and modals
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "may", "might",
    "can", "cannot", "could", "must", "ca", "wo",
    // prepositions
    "about", "above", "across", "after", "against", "along", "amongst", "among", "around", "at",
    "before", "behind", "below", "beside", "besides", "between", "beyond", "by", "down",
    "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
    "over", "per", "through", "throughout", "thru", "to", "toward", "towards", "under", "until",
    "up", "upon", "via", "with", "within", "without",
    // conjunctions and subordinators
    "and", "but", "or", "so", "if", "then", "than", "though", "although", "because", "since",
    "unless", "while", "whether", "as", "whereas", "whereby", "wherein", "whereupon", "whence",
    "thence", "hence", "thereby", "therefore", "therein", "thereupon", "thereafter", "whereafter",
    // interrogatives and relatives
    "what", "which", "who", "when", "where", "why", "how", "whenever", "wherever", "whither",
    // adverbs and particles
    "again", "ago", "almost", "alone", "already", "also", "always", "else", "elsewhere", "even",
    "ever", "here", "hereafter", "hereby", "herein", "hereupon", "however", "indeed", "just",
    "later", "least", "less", "meanwhile", "moreover", "mostly", "never", "nevertheless",
    "next", "not", "now", "nowhere", "often", "once", "only", "perhaps", "quite", "rather",
    "really", "regarding", "seem", "seemed", "seeming", "seems", "sometime", "sometimes",
    "somewhere", "still", "there", "thereof", "thus", "together", "too", "very", "well", "yet",
    "n't", "please", "afterwards", "beforehand", "formerly", "latterly", "namely",
    // common verbs that behave like function words
    "become", "becomes", "becoming", "became", "get", "go", "give", "make", "made", "move",
    "put", "say", "see", "show", "take", "call", "keep", "used", "using",
    // numbers and ordinals
    "first", "last", "two", "three", "four", "five", "six", "eight", "nine", "ten", "eleven",
    "twelve", "fifteen", "twenty", "forty", "fifty", "sixty", "hundred", "third",
    // misc
    "top", "bottom", "front", "back", "side", "part", "full", "empty", "whole", "name",
    "re", "'s", "'re", "'ll", "'ve", "'m", "'d",
];

/// Returns the built-in stop-word set.
pub fn stop_words() -> HashSet<String> {
    STOP_WORDS.iter().map(|s| s.to_string()).collect()
}
