/*!
# Language Reference

## Words and their kinds

A goofy source file is split into words on whitespace, line by line. A
double quote starts a region in which spaces no longer split, so
`"two words"` is one word; an unclosed quote runs to the end of its
line. Each word is then classified by trying these rules in order and
taking the first match:

 * All-uppercase letters: an instruction, e.g. `SHOVE`.
 * An optional `-` followed by digits: an integer, e.g. `-42`.
 * Contains a `"`: a string, e.g. `"two words"`.
 * One of `=` `>` `<` `>=` `<=` `!=`: a comparator.
 * Begins with `#`: a jump target, e.g. `#loop`.
 * Ends with `:`: a label, e.g. `loop:`.
 * Anything else: unknown, which is an error if it is ever executed.

The order occasionally matters. `#loop:` begins with `#`, so it is a
jump target, not a label. `3:` is not an integer folded into a label;
the integer rule rejects it first and the label rule claims it.

## Instructions

| Word | Effect |
|---|---|
| `SHOVE n` | push the integer `n` |
| `YEET` | pop a, pop b, push a − b |
| `GLUE` | pop a, pop b, push a + b |
| `MOOSH` | pop a, pop b, push a × b |
| `SNIP` | pop a, pop b, push a ÷ b, truncated toward zero |
| `YELL w` | print the word `w`, quotes stripped from the ends |
| `SNOOP` | read one input line as a signed integer and push it |
| `BOUNCE c n #t` | if top-of-stack `c` `n`, jump to label `t` |
| `FREEZE` | stop, successfully |

In the pop order above, `a` is the top of the stack, the value pushed
most recently. `SHOVE 4 SHOVE 2 YEET` leaves `-2` because the machine
computes `2 - 4`.

Each of `YEET`, `GLUE`, `MOOSH` and `SNIP` also has an inline form:
when the next word is an integer, the machine pops only one value `a`
and combines it with the literal, as in `YEET 1` computing `a - 1`.
The two forms are distinguished only by that next word, so a bare
integer cannot sit between two instructions for its own sake; it will
be taken as an operand.

## Jumps

`BOUNCE` peeks at the top of the stack without popping it, compares it
to the integer bound with the given comparator, and on success moves
execution to the first label in the program whose name matches the
target (`#loop` matches `loop:`). On failure execution simply
continues after the jump's three operands. Labels themselves do
nothing when execution passes over them.

## Input

`SNOOP` is the only instruction that waits. It reads exactly one line,
which must be an optionally signed integer and nothing else: `-7` is
fine, `seven` and ` 12 ` are not.

*/
