//! Small hand-checked snapshot shared by the engine tests.
