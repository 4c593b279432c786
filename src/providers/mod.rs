pub mod arin;
