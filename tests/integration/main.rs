//! Integration tests against an in-process stub backend.

mod helpers;

mod share_test;
