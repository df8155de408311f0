mod failures;
mod verbs;
