/*!
# Appendix A: Error Messages

A failing run stops at the first problem and prints one diagnostic.
Most diagnostics name a position and the word that caused the trouble,
as in `UNSUPPORTED INSTRUCTION AT 3; HOP`. `AT 3` means the third word
of the program, counting from 1 across all lines.

## EMPTY PROGRAM
The file contained no words at all. Whitespace does not count.

## UNRECOGNIZED TOKEN
Execution reached a word that is not an instruction and not a label,
such as a stray integer or a typo in lowercase. Operands never trigger
this; instructions consume their own operands.

## UNSUPPORTED INSTRUCTION
An all-uppercase word that is not one of the nine instructions, e.g.
`HOP`.

## MISSING OPERAND
`SHOVE` or `YELL` sat at the very end of the program with nothing
after it.

## TYPE MISMATCH
An operand was present but useless: `SHOVE` followed by anything that
is not an integer, or an integer too large for the machine.

## STACK UNDERFLOW
An instruction needed more values than the stack held: arithmetic with
fewer than two (or, in the inline form, none), or `BOUNCE` with an
empty stack.

## DIVIDE BY ZERO
`SNIP` with zero as the divisor. The operands are already popped when
this is detected; they are not restored.

## INVALID INPUT
The line given to `SNOOP` was not an optionally signed integer.

## MALFORMED JUMP
`BOUNCE` without its three operands (comparator, integer bound, and
`#target`) in exactly that order.

## UNDEFINED LABEL
A taken jump searched the whole program and found no label matching
its target.

*/
